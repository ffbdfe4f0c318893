/* Licensed to the Apache Software Foundation (ASF) under one
 * or more contributor license agreements.  See the NOTICE file
 * distributed with this work for additional information
 * regarding copyright ownership.  The ASF licenses this file
 * to you under the Apache License, Version 2.0 (the
 * "License"); you may not use this file except in compliance
 * with the License.  You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing,
 * software distributed under the License is distributed on an
 * "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
 * KIND, either express or implied.  See the License for the
 * specific language governing permissions and limitations
 * under the License.
 */

//! Pluggable HTTP layer used by management API clients.

use async_trait::async_trait;
use reqwest::Url;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::client_parameters::ClientParameters;
use crate::error::ClientError;

/// HTTP capability of a management API client: given a path relative to
/// the API root, perform a call with the configured credentials and return
/// the JSON response.
#[async_trait]
pub trait HttpLayer: Send + Sync {
    /// Get the full URL for the provided path.
    fn get_url(&self, path: &str) -> Result<Url, ClientError>;

    /// Invoke an HTTP GET request against the API.
    async fn get(&self, path: &str) -> Result<Value, ClientError>;

    /// Invoke an HTTP GET request against the API with query parameters.
    async fn get_with_query(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<Value, ClientError>;

    /// Invoke an HTTP POST request against the API.
    async fn post(&self, path: &str, payload: &Value) -> Result<Option<Value>, ClientError>;

    /// Invoke an HTTP PUT request against the API.
    async fn put(&self, path: &str, payload: &Value) -> Result<(), ClientError>;

    /// Invoke an HTTP DELETE request against the API.
    async fn delete(&self, path: &str) -> Result<(), ClientError>;
}

impl dyn HttpLayer {
    /// Invoke an HTTP GET request and deserialize the JSON response.
    pub async fn get_as<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let value = self.get(path).await?;
        serde_json::from_value(value).map_err(|_| ClientError::InvalidJsonResponse)
    }
}

/// Builds the [`HttpLayer`] a client uses for its outbound requests.
///
/// Implementations typically customize request headers, proxy-related and
/// TLS-related settings. The factory is stored opaquely by
/// [`ClientParameters`] and invoked only by the client constructor.
pub trait HttpLayerFactory: Send + Sync {
    /// Create the HTTP layer for the provided parameters.
    fn create(&self, parameters: &ClientParameters) -> Result<Box<dyn HttpLayer>, ClientError>;
}

/// Post-configures the [`reqwest::ClientBuilder`] used by a client
/// internally. Essential settings are applied before the configurator is
/// invoked.
#[deprecated(note = "use `HttpLayerFactory` instead")]
pub trait ClientBuilderConfigurator: Send + Sync {
    /// Configure the builder, usually returning the same instance.
    fn configure(&self, builder: reqwest::ClientBuilder) -> reqwest::ClientBuilder;
}

impl<F> ClientBuilderConfigurator for F
where
    F: Fn(reqwest::ClientBuilder) -> reqwest::ClientBuilder + Send + Sync,
{
    fn configure(&self, builder: reqwest::ClientBuilder) -> reqwest::ClientBuilder {
        self(builder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use serde::Deserialize;
    use serde_json::json;

    struct StaticLayer {
        api_url: Url,
        response: Value,
    }

    #[async_trait]
    impl HttpLayer for StaticLayer {
        fn get_url(&self, path: &str) -> Result<Url, ClientError> {
            self.api_url
                .join(path)
                .map_err(|_| ClientError::InvalidUrl(path.to_string()))
        }

        async fn get(&self, _path: &str) -> Result<Value, ClientError> {
            Ok(self.response.clone())
        }

        async fn get_with_query(
            &self,
            _path: &str,
            _query: &[(&str, &str)],
        ) -> Result<Value, ClientError> {
            Ok(self.response.clone())
        }

        async fn post(&self, _path: &str, _payload: &Value) -> Result<Option<Value>, ClientError> {
            Ok(None)
        }

        async fn put(&self, _path: &str, _payload: &Value) -> Result<(), ClientError> {
            Ok(())
        }

        async fn delete(&self, _path: &str) -> Result<(), ClientError> {
            Ok(())
        }
    }

    fn static_layer(response: Value) -> Box<dyn HttpLayer> {
        Box::new(StaticLayer {
            api_url: Url::parse("http://localhost:15672/api/").unwrap(),
            response,
        })
    }

    #[derive(Debug, Deserialize)]
    struct Overview {
        rabbitmq_version: String,
    }

    #[tokio::test]
    async fn should_deserialize_typed_response() {
        let layer = static_layer(json!({ "rabbitmq_version": "4.0.5" }));
        let overview: Overview = layer.get_as("overview").await.unwrap();
        assert_eq!(overview.rabbitmq_version, "4.0.5");
    }

    #[tokio::test]
    async fn should_fail_on_mismatched_response() {
        let layer = static_layer(json!({ "unexpected": true }));
        let result = layer.get_as::<Overview>("overview").await;
        assert!(matches!(result, Err(ClientError::InvalidJsonResponse)));
    }

    #[test]
    fn should_join_path_against_api_url() {
        let layer = static_layer(Value::Null);
        let url = layer.get_url("queues/%2F/orders").unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:15672/api/queues/%2F/orders"
        );
    }

    #[test]
    #[allow(deprecated)]
    fn should_accept_closure_as_configurator() {
        let configurator: Arc<dyn ClientBuilderConfigurator> =
            Arc::new(|builder: reqwest::ClientBuilder| builder.user_agent("rabbitmq-http-config"));
        let builder = configurator.configure(reqwest::ClientBuilder::new());
        assert!(builder.build().is_ok());
    }
}
