//! Delete-Interceptor: turns a form submission into an out-of-band DELETE.
//!
//! # Design
//! The host captures the `FormSnapshot` synchronously inside its submit
//! handler and hands it to `DeleteInterceptor::submit` together with a
//! spawner. The round-trip is spawned, never awaited, and `submit` returns
//! `false` straight away so the browser's native submission is suppressed.
//! Submissions are independent: nothing is deduplicated or cancelled, and
//! the last completion to run owns the page.

use std::future::Future;
use std::rc::Rc;

use futures::future::{FutureExt, LocalBoxFuture};
use tracing::{debug, warn};

use crate::client::PostsClient;
use crate::error::ClientError;
use crate::form::FormSnapshot;
use crate::http::Transport;
use crate::types::ResponseDocument;

/// The page the interceptor writes its outcome to.
pub trait Page {
    /// Replace the whole visible document body with `markup`.
    fn replace_body(&self, markup: &str);

    /// Tell the user a delete failed.
    fn report_failure(&self, error: &ClientError);
}

/// Wires a `PostsClient` to a transport and a page.
pub struct DeleteInterceptor<T, P> {
    client: PostsClient,
    transport: Rc<T>,
    page: Rc<P>,
}

impl<T, P> Clone for DeleteInterceptor<T, P> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            transport: Rc::clone(&self.transport),
            page: Rc::clone(&self.page),
        }
    }
}

impl<T, P> DeleteInterceptor<T, P>
where
    T: Transport + 'static,
    P: Page + 'static,
{
    pub fn new(client: PostsClient, transport: Rc<T>, page: Rc<P>) -> Self {
        Self {
            client,
            transport,
            page,
        }
    }

    /// Build, send and interpret one delete, replacing the page on success.
    pub fn round_trip(
        &self,
        snapshot: FormSnapshot,
    ) -> impl Future<Output = Result<ResponseDocument, ClientError>> + 'static {
        let client = self.client.clone();
        let transport = Rc::clone(&self.transport);
        let page = Rc::clone(&self.page);
        async move {
            let request = client.build_delete_post(&snapshot);
            let response = transport.send(request).await?;
            let document = client.parse_delete_post(response)?;
            page.replace_body(&document.markup);
            Ok(document)
        }
    }

    /// Submit handler body. Always returns `false`.
    pub fn submit<S>(&self, snapshot: FormSnapshot, spawn: S) -> bool
    where
        S: FnOnce(LocalBoxFuture<'static, ()>),
    {
        debug!(fields = snapshot.len(), "intercepted form submission");
        let page = Rc::clone(&self.page);
        let round_trip = self.round_trip(snapshot);
        spawn(
            async move {
                if let Err(error) = round_trip.await {
                    warn!(%error, "delete request failed");
                    page.report_failure(&error);
                }
            }
            .boxed_local(),
        );
        false
    }
}
