use std::future::Future;
use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::time::timeout;

use crate::handlers;
use crate::http::parser::{ParseError, RequestParser};
use crate::http::request::Request;
use crate::http::writer::ResponseWriter;
use crate::server::router::Router;
use crate::services::{Fetcher, FileSource, RandomSource};

/// Upper bound on the bytes of one request head.
pub const MAX_HEAD_BYTES: usize = 64 * 1024;

/// Serves a single accepted connection.
///
/// The listener awaits each call before accepting the next connection, so an
/// implementation that spawns its work is the place to add concurrency.
pub trait ConnectionHandler {
    fn handle<S>(&self, stream: S, peer: SocketAddr) -> impl Future<Output = anyhow::Result<()>>
    where
        S: AsyncRead + AsyncWrite + Unpin;
}

/// One request, one response, then close.
pub struct HttpHandler<F, R, C> {
    router: Router<F, R, C>,
    read_timeout: Duration,
}

impl<F, R, C> HttpHandler<F, R, C> {
    pub fn new(router: Router<F, R, C>, read_timeout: Duration) -> Self {
        Self {
            router,
            read_timeout,
        }
    }
}

impl<F, R, C> ConnectionHandler for HttpHandler<F, R, C>
where
    F: FileSource,
    R: RandomSource,
    C: Fetcher,
{
    async fn handle<S>(&self, stream: S, peer: SocketAddr) -> anyhow::Result<()>
    where
        S: AsyncRead + AsyncWrite + Unpin,
    {
        tracing::debug!(peer = %peer, "Serving connection");
        Connection::new(stream, &self.router, self.read_timeout)
            .run()
            .await
    }
}

pub struct Connection<'a, S, F, R, C> {
    stream: BufReader<S>,
    router: &'a Router<F, R, C>,
    read_timeout: Duration,
    state: ConnectionState,
}

pub enum ConnectionState {
    Reading,
    Processing(Result<Request, ParseError>),
    Writing(ResponseWriter),
    Closed,
}

impl<'a, S, F, R, C> Connection<'a, S, F, R, C>
where
    S: AsyncRead + AsyncWrite + Unpin,
    F: FileSource,
    R: RandomSource,
    C: Fetcher,
{
    pub fn new(stream: S, router: &'a Router<F, R, C>, read_timeout: Duration) -> Self {
        Self {
            stream: BufReader::new(stream),
            router,
            read_timeout,
            state: ConnectionState::Reading,
        }
    }

    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match &mut self.state {
                ConnectionState::Reading => {
                    let parsed = timeout(self.read_timeout, self.read_request())
                        .await
                        .context("Timed out reading request")??;
                    self.state = ConnectionState::Processing(parsed);
                }

                ConnectionState::Processing(parsed) => {
                    let response = match parsed {
                        Ok(req) => self.router.dispatch(Some(req.target.as_str())).await,
                        Err(ParseError::HeadTooLarge(limit)) => {
                            tracing::warn!(limit = *limit, "Request head too large");
                            handlers::head_too_large(*limit)
                        }
                        Err(e) => {
                            tracing::info!(error = %e, "Request has no usable GET line");
                            self.router.dispatch(None).await
                        }
                    };

                    self.state = ConnectionState::Writing(ResponseWriter::new(&response));
                }

                ConnectionState::Writing(writer) => {
                    writer.write_to_stream(self.stream.get_mut()).await?;
                    self.stream.get_mut().shutdown().await?;
                    self.state = ConnectionState::Closed;
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        Ok(())
    }

    /// Reads header lines until the blank line or end of stream.
    ///
    /// At most [`MAX_HEAD_BYTES`] are buffered; a longer head is reported as
    /// [`ParseError::HeadTooLarge`] without reading the rest.
    pub async fn read_request(&mut self) -> anyhow::Result<Result<Request, ParseError>> {
        let mut parser = RequestParser::new();
        let mut line = Vec::new();
        let mut total = 0;

        loop {
            let remaining = MAX_HEAD_BYTES - total;
            if remaining == 0 {
                return Ok(Err(ParseError::HeadTooLarge(MAX_HEAD_BYTES)));
            }

            line.clear();
            let n = (&mut self.stream)
                .take(remaining as u64)
                .read_until(b'\n', &mut line)
                .await?;

            if n == 0 {
                // Client closed before the blank line
                break;
            }

            total += n;
            if total == MAX_HEAD_BYTES && line.last() != Some(&b'\n') {
                return Ok(Err(ParseError::HeadTooLarge(MAX_HEAD_BYTES)));
            }

            let text = String::from_utf8_lossy(&line);
            let text = text.trim_end_matches('\n').trim_end_matches('\r');
            if parser.feed(text) {
                break;
            }
        }

        Ok(parser.finish())
    }
}
