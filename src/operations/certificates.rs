//! Certificate operations

use super::require_id;
use crate::client::BatchClient;
use crate::error::Result;
use crate::models::Certificate;
use crate::options::{CallOptions, ContinuationOptions, ListOptions};
use crate::paging::Pager;
use crate::types::Method;

/// Operations on the account's certificates
pub struct CertificateOperations<'a> {
    client: &'a BatchClient,
}

impl<'a> CertificateOperations<'a> {
    pub(crate) fn new(client: &'a BatchClient) -> Self {
        Self { client }
    }

    /// List the certificates in the account
    pub fn list(&self, options: Option<ListOptions>) -> Result<Pager<Certificate>> {
        self.client.list_pager("certificates", options, Vec::new())
    }

    /// Resume a certificate listing from a continuation link
    pub fn list_next(
        &self,
        next_link: &str,
        options: Option<ContinuationOptions>,
    ) -> Result<Pager<Certificate>> {
        self.client.resume_pager(next_link, options)
    }

    /// Get one certificate by thumbprint
    ///
    /// The service addresses certificates with an OData function-style path.
    pub async fn get(
        &self,
        thumbprint_algorithm: &str,
        thumbprint: &str,
        options: Option<CallOptions>,
    ) -> Result<Certificate> {
        require_id("thumbprint_algorithm", thumbprint_algorithm)?;
        require_id("thumbprint", thumbprint)?;
        let path = format!(
            "certificates(thumbprintAlgorithm={thumbprint_algorithm},thumbprint={thumbprint})"
        );
        self.client.fetch_json(Method::GET, &path, options).await
    }
}
