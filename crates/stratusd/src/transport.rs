//! Request transport
//!
//! Handlers never see the wire. A [`Transport`] yields raw request
//! documents and carries replies back; [`serve`] ties one to a [`Handler`].

use crate::handler::{Handler, Subject, error_reply};
use async_trait::async_trait;
use serde::Deserialize;
use tokio::io::{
    self, AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader, Lines, Stdin, Stdout,
};

/// An inbound request: `{"subject": "create", "data": {...}}`
#[derive(Debug, Deserialize)]
pub struct Request {
    pub subject: Subject,
    #[serde(default)]
    pub data: serde_json::Value,
}

#[async_trait]
pub trait Transport: Send {
    /// The next raw request, `None` once the peer is gone
    async fn receive(&mut self) -> io::Result<Option<String>>;

    async fn reply(&mut self, reply: &str) -> io::Result<()>;
}

/// Line-delimited JSON over a reader/writer pair
pub struct LineTransport<R, W> {
    lines: Lines<BufReader<R>>,
    writer: W,
}

impl<R, W> LineTransport<R, W>
where
    R: AsyncRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            lines: BufReader::new(reader).lines(),
            writer,
        }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl LineTransport<Stdin, Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin(), io::stdout())
    }
}

#[async_trait]
impl<R, W> Transport for LineTransport<R, W>
where
    R: AsyncRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    async fn receive(&mut self) -> io::Result<Option<String>> {
        loop {
            match self.lines.next_line().await? {
                Some(line) if line.trim().is_empty() => continue,
                other => return Ok(other),
            }
        }
    }

    async fn reply(&mut self, reply: &str) -> io::Result<()> {
        self.writer.write_all(reply.as_bytes()).await?;
        self.writer.write_all(b"\n").await?;
        self.writer.flush().await
    }
}

/// Answer requests until the transport is exhausted.
///
/// Requests are handled one at a time; a malformed request gets an error
/// reply and does not stop the loop.
pub async fn serve<T: Transport>(handler: &Handler, transport: &mut T) -> io::Result<usize> {
    let mut handled = 0;

    while let Some(raw) = transport.receive().await? {
        let reply = match serde_json::from_str::<Request>(&raw) {
            Ok(request) => {
                tracing::debug!(subject = %request.subject, "received request");
                let data = request.data.to_string();
                handler.handle(request.subject, data.as_bytes()).await
            }
            Err(e) => {
                tracing::warn!("malformed request: {}", e);
                error_reply("Failed to parse request.")
            }
        };

        transport.reply(&reply).await?;
        handled += 1;
    }

    tracing::debug!(handled, "transport closed");
    Ok(handled)
}
