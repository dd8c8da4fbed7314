//! Originator-side sinks for feed outcomes.

use tokio::sync::mpsc;

use crate::result::FeedResult;

/// Sink that receives the outcome of a feed operation.
///
/// Implemented by whoever originated the operation (a network session, a
/// test harness). A [`FeedToken`](crate::FeedToken) lineage calls
/// [`FeedTransport::send`] at most once, from whichever thread resolves it.
pub trait FeedTransport: Send + Sync {
	/// Delivers the outcome. `success` is true for acknowledgements.
	fn send(&self, result: FeedResult, success: bool);
}

impl<F> FeedTransport for F
where
	F: Fn(FeedResult, bool) + Send + Sync,
{
	fn send(&self, result: FeedResult, success: bool) {
		self(result, success)
	}
}

/// One outcome as observed by a [`DeliveryReceiver`].
#[derive(Debug, Clone, PartialEq)]
pub struct Delivery {
	pub result: FeedResult,
	pub success: bool,
}

/// Transport that forwards outcomes into an unbounded channel.
///
/// Lets an async originator await the outcome of operations resolved on
/// other threads or tasks.
#[derive(Debug, Clone)]
pub struct ChannelTransport {
	tx: mpsc::UnboundedSender<Delivery>,
}

impl ChannelTransport {
	/// Creates a transport and the receiver its deliveries arrive on.
	pub fn new() -> (Self, DeliveryReceiver) {
		let (tx, rx) = mpsc::unbounded_channel();
		(Self { tx }, DeliveryReceiver { rx })
	}
}

impl FeedTransport for ChannelTransport {
	fn send(&self, result: FeedResult, success: bool) {
		if self.tx.send(Delivery { result, success }).is_err() {
			tracing::debug!(success, "feed.transport.receiver_closed");
		}
	}
}

/// Receiving half of a [`ChannelTransport`].
#[derive(Debug)]
pub struct DeliveryReceiver {
	rx: mpsc::UnboundedReceiver<Delivery>,
}

impl DeliveryReceiver {
	/// Waits for the next delivery. Returns `None` once every transport
	/// clone is gone and the queue is drained.
	pub async fn recv(&mut self) -> Option<Delivery> {
		self.rx.recv().await
	}

	/// Returns one queued delivery without waiting.
	pub fn try_recv(&mut self) -> Option<Delivery> {
		self.rx.try_recv().ok()
	}

	/// Number of deliveries queued and not yet received.
	pub fn len(&self) -> usize {
		self.rx.len()
	}

	pub fn is_empty(&self) -> bool {
		self.rx.is_empty()
	}
}
