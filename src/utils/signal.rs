use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};

#[cfg(not(unix))]
use futures::future::BoxFuture;
#[cfg(unix)]
use tokio::signal::unix::Signal;

/// Resolves once the process is asked to stop, used for graceful shutdown.
pub struct ShutdownSignal {
    #[cfg(unix)]
    signals: smallvec::SmallVec<[Signal; 3]>,
    #[cfg(not(unix))]
    ctrl_c: BoxFuture<'static, std::io::Result<()>>,
}

impl ShutdownSignal {
    pub fn new() -> Self {
        trace!("registering shutdown signal listeners");

        #[cfg(unix)]
        {
            use tokio::signal::unix::{self, SignalKind};

            let kinds = [
                SignalKind::interrupt(),
                SignalKind::terminate(),
                SignalKind::quit(),
            ];

            let signals = kinds
                .into_iter()
                .filter_map(|kind| {
                    unix::signal(kind)
                        .inspect_err(|err| {
                            error!("failed to listen for signal {kind:?}: {err}");
                        })
                        .ok()
                })
                .collect();

            ShutdownSignal { signals }
        }

        #[cfg(not(unix))]
        {
            ShutdownSignal {
                ctrl_c: Box::pin(tokio::signal::ctrl_c()),
            }
        }
    }
}

impl Default for ShutdownSignal {
    fn default() -> Self {
        Self::new()
    }
}

impl Future for ShutdownSignal {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        #[cfg(unix)]
        {
            for signal in &mut self.signals {
                if signal.poll_recv(cx).is_ready() {
                    info!("shutdown signal received");
                    return Poll::Ready(());
                }
            }
        }

        #[cfg(not(unix))]
        {
            if self.ctrl_c.as_mut().poll(cx).is_ready() {
                info!("shutdown signal received");
                return Poll::Ready(());
            }
        }

        Poll::Pending
    }
}
