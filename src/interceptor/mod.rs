pub mod appointment_count;

pub use appointment_count::AppointmentCountInterceptor;

use std::sync::Arc;

use async_trait::async_trait;
use http::{request, response};

use crate::models::Resource;

/// Details of the request that produced the outgoing response.
#[derive(Debug, Clone, Default)]
pub struct RequestDetails {
    /// Server-assigned operation name, e.g. "metadata".
    pub operation: Option<String>,
}

/// The response about to be sent to the client.
#[derive(Debug, Clone, Default)]
pub struct ResponseDetails {
    pub resource: Option<Resource>,
}

/// Server hook invoked once per outgoing response, for every resource kind.
#[async_trait]
pub trait ResponseInterceptor: Send + Sync {
    /// Returns `true` to let the response proceed.
    async fn outgoing_response(
        &self,
        request: &RequestDetails,
        response: &ResponseDetails,
        raw_request: &request::Parts,
        raw_response: &mut response::Parts,
    ) -> bool;
}

/// Ordered set of interceptors driven by the host for each response.
#[derive(Default)]
pub struct InterceptorRegistry {
    interceptors: Vec<Arc<dyn ResponseInterceptor>>,
}

impl InterceptorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, interceptor: Arc<dyn ResponseInterceptor>) {
        self.interceptors.push(interceptor);
    }

    /// Run all interceptors in registration order, stopping at the first one
    /// that vetoes the response.
    pub async fn outgoing_response(
        &self,
        request: &RequestDetails,
        response: &ResponseDetails,
        raw_request: &request::Parts,
        raw_response: &mut response::Parts,
    ) -> bool {
        for interceptor in &self.interceptors {
            if !interceptor
                .outgoing_response(request, response, raw_request, raw_response)
                .await
            {
                return false;
            }
        }

        true
    }
}
