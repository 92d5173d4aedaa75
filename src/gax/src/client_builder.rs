// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Client construction.
//!
//! Every generated client has a `builder()` function that returns a
//! [ClientBuilder]. The builder records three settings:
//!
//! * the endpoint, or base URL, used for every request,
//! * the credentials,
//! * whether the client emits [tracing] spans.
//!
//! Calling [build][ClientBuilder::build] freezes these settings, a client has
//! no way to change them afterwards. Create a second client if you need a
//! different configuration.
//!
//! # Example
//! ```
//! # use google_cloud_gax::client_builder::examples;
//! # use google_cloud_gax::client_builder::Result;
//! # tokio_test::block_on(async {
//! use examples::Client; // Stands in for a generated client.
//! let client = Client::builder()
//!     .with_endpoint("http://localhost:8080")
//!     .build()
//!     .await?;
//! # Result::<()>::Ok(()) });
//! ```
//!
//! [tracing]: https://docs.rs/tracing

/// The result of [ClientBuilder::build].
pub type Result<T> = std::result::Result<T, Error>;

/// A client could not be built.
///
/// # Example
/// ```no_run
/// # use google_cloud_gax::client_builder::{examples, Error};
/// # tokio_test::block_on(async {
/// use examples::Client; // Stands in for a generated client.
/// match Client::builder().with_endpoint("localhost:8080").build().await {
///     Ok(_) => println!("ready"),
///     Err(e) if e.is_endpoint() => println!("fix the endpoint: {e}"),
///     Err(e) => println!("cannot create the client: {e}"),
/// }
/// # Ok::<(), Error>(()) });
/// ```
#[derive(thiserror::Error, Debug)]
#[error(transparent)]
pub struct Error(ErrorKind);

impl Error {
    /// The credentials could not be created.
    pub fn is_default_credentials(&self) -> bool {
        matches!(&self.0, ErrorKind::Credentials(_))
    }

    /// The endpoint is not an absolute `http` or `https` URL.
    pub fn is_endpoint(&self) -> bool {
        matches!(&self.0, ErrorKind::Endpoint { .. })
    }

    /// The HTTP client could not be created.
    pub fn is_transport(&self) -> bool {
        matches!(&self.0, ErrorKind::Transport(_))
    }

    #[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
    pub fn cred<T: Into<BoxError>>(source: T) -> Self {
        Self(ErrorKind::Credentials(source.into()))
    }

    #[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
    pub fn endpoint<V: Into<String>, T: Into<BoxError>>(endpoint: V, source: T) -> Self {
        Self(ErrorKind::Endpoint {
            endpoint: endpoint.into(),
            source: source.into(),
        })
    }

    #[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
    pub fn transport<T: Into<BoxError>>(source: T) -> Self {
        Self(ErrorKind::Transport(source.into()))
    }
}

#[derive(thiserror::Error, Debug)]
enum ErrorKind {
    #[error("cannot create the client credentials")]
    Credentials(#[source] BoxError),
    #[error("invalid endpoint {endpoint:?}")]
    Endpoint {
        endpoint: String,
        #[source]
        source: BoxError,
    },
    #[error("cannot create the HTTP client")]
    Transport(#[source] BoxError),
}

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Collects the configuration for a client of type `C`.
///
/// The type parameters are filled in by each client's `builder()` function,
/// applications never name them.
///
/// ```
/// # use google_cloud_gax::client_builder::examples;
/// # use google_cloud_gax::client_builder::Result;
/// # tokio_test::block_on(async {
/// use examples::{Client, credentials};
/// let client = Client::builder()
///     .with_endpoint("https://private.googleapis.com/")
///     .with_credentials(credentials::api_key::Builder::new("my-key").build())
///     .with_tracing()
///     .build()
///     .await?;
/// # Result::<()>::Ok(()) });
/// ```
#[derive(Clone, Debug)]
pub struct ClientBuilder<F, Cr> {
    config: internal::ClientConfig<Cr>,
    factory: F,
}

impl<F, Cr> ClientBuilder<F, Cr> {
    /// Validates the configuration and creates the client.
    pub async fn build<C>(self) -> Result<C>
    where
        F: internal::ClientFactory<Client = C, Credentials = Cr>,
    {
        self.factory.build(self.config).await
    }

    /// Replaces the service's default base URL.
    ///
    /// Request paths are appended to this value, so it may carry a path
    /// prefix such as `http://localhost:9000/proxy`. A trailing `/` is
    /// ignored.
    pub fn with_endpoint<V: Into<String>>(mut self, v: V) -> Self {
        self.config.endpoint = Some(v.into());
        self
    }

    /// Emits a [tracing] span for each request.
    ///
    /// Setting `GOOGLE_CLOUD_RUST_LOGGING=true` in the environment has the
    /// same effect.
    ///
    /// [tracing]: https://docs.rs/tracing
    pub fn with_tracing(mut self) -> Self {
        self.config.tracing = true;
        self
    }

    /// Sets the credentials used to authorize each request.
    ///
    /// Without this setting the client looks for an API key in the
    /// environment, see the `google-cloud-auth` crate.
    pub fn with_credentials<T: Into<Cr>>(mut self, v: T) -> Self {
        self.config.cred = Some(v.into());
        self
    }
}

#[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
pub mod internal {
    /// Creates a client from its frozen configuration.
    pub trait ClientFactory {
        type Client;
        type Credentials;
        fn build(
            self,
            config: ClientConfig<Self::Credentials>,
        ) -> impl Future<Output = super::Result<Self::Client>>;
    }

    pub fn new_builder<F, Cr, C>(factory: F) -> super::ClientBuilder<F, Cr>
    where
        F: ClientFactory<Client = C, Credentials = Cr>,
    {
        super::ClientBuilder {
            factory,
            config: ClientConfig::default(),
        }
    }

    /// The settings recorded by [ClientBuilder][super::ClientBuilder].
    ///
    /// `None` means "use the client's default".
    #[derive(Clone, Debug)]
    pub struct ClientConfig<Cr> {
        pub endpoint: Option<String>,
        pub cred: Option<Cr>,
        pub tracing: bool,
    }

    impl<Cr> Default for ClientConfig<Cr> {
        fn default() -> Self {
            Self {
                endpoint: None,
                cred: None,
                tracing: false,
            }
        }
    }
}

#[doc(hidden)]
pub mod examples {
    //! Stand-ins for a generated client, used in the documentation.

    use super::internal::{ClientConfig, ClientFactory, new_builder};

    /// Records the configuration it was built with.
    #[derive(Debug)]
    pub struct Client(pub ClientConfig<Credentials>);

    impl Client {
        pub fn builder() -> super::ClientBuilder<Factory, Credentials> {
            new_builder(Factory)
        }
    }

    pub struct Factory;

    impl ClientFactory for Factory {
        type Client = Client;
        type Credentials = Credentials;
        async fn build(self, config: ClientConfig<Credentials>) -> super::Result<Client> {
            if let Some(endpoint) = &config.endpoint {
                if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
                    return Err(super::Error::endpoint(endpoint.clone(), "missing scheme"));
                }
            }
            Ok(Client(config))
        }
    }

    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Credentials {
        pub api_key: String,
    }

    pub mod credentials {
        pub mod api_key {
            pub struct Builder(String);
            impl Builder {
                pub fn new<V: Into<String>>(key: V) -> Self {
                    Self(key.into())
                }
                pub fn build(self) -> super::super::Credentials {
                    super::super::Credentials { api_key: self.0 }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::examples::{Client, credentials};
    use super::*;
    use std::error::Error as _;

    fn codec_error() -> wire::CodecError {
        wire::CodecError::InvalidIntegerFormat {
            path: "$.pageSize".to_string(),
            value: "x".to_string(),
        }
    }

    #[tokio::test]
    async fn defaults() -> anyhow::Result<()> {
        let config = Client::builder().build().await?.0;
        assert_eq!(config.endpoint, None);
        assert_eq!(config.cred, None);
        assert!(!config.tracing);
        Ok(())
    }

    #[tokio::test]
    async fn settings() -> anyhow::Result<()> {
        let config = Client::builder()
            .with_endpoint("http://first.example.com")
            .with_endpoint("http://localhost:9000/proxy")
            .with_credentials(credentials::api_key::Builder::new("test-key").build())
            .with_tracing()
            .build()
            .await?
            .0;
        assert_eq!(config.endpoint.as_deref(), Some("http://localhost:9000/proxy"));
        assert_eq!(config.cred.map(|c| c.api_key).as_deref(), Some("test-key"));
        assert!(config.tracing);
        Ok(())
    }

    #[tokio::test]
    async fn bad_endpoint() {
        let err = Client::builder()
            .with_endpoint("localhost:8080")
            .build()
            .await
            .unwrap_err();
        assert!(err.is_endpoint(), "{err:?}");
        assert!(err.to_string().contains("localhost:8080"), "{err}");
    }

    #[test]
    fn kinds() {
        let err = Error::cred(codec_error());
        assert!(err.is_default_credentials(), "{err:?}");
        assert!(!err.is_endpoint() && !err.is_transport(), "{err:?}");

        let err = Error::endpoint("ftp://x", codec_error());
        assert!(err.is_endpoint(), "{err:?}");
        assert!(!err.is_default_credentials() && !err.is_transport(), "{err:?}");

        let err = Error::transport(codec_error());
        assert!(err.is_transport(), "{err:?}");
        assert!(err.to_string().contains("HTTP client"), "{err}");
    }

    #[test]
    fn source() {
        let err = Error::endpoint("ftp://x", codec_error());
        let got = err
            .source()
            .and_then(|e| e.downcast_ref::<wire::CodecError>());
        assert!(matches!(got, Some(e) if e.is_invalid_integer_format()), "{err:?}");
    }
}
