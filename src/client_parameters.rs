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

use std::fmt;
use std::sync::Arc;

use reqwest::Url;

use crate::client_parameters_builder::ClientParametersBuilder;
use crate::http_layer::{ClientBuilderConfigurator, HttpLayerFactory};

/// Validated parameters to create a management API client.
///
/// Instances can only be obtained from [`ClientParametersBuilder::build`],
/// which guarantees that the URL, username and password are present and
/// that the URL carries no user-info.
pub struct ClientParameters {
    url: Url,
    username: String,
    password: String,
    http_layer_factory: Option<Arc<dyn HttpLayerFactory>>,
    client_builder_configurator: Option<Arc<dyn ClientBuilderConfigurator>>,
}

impl ClientParameters {
    pub(crate) fn new(
        url: Url,
        username: String,
        password: String,
        http_layer_factory: Option<Arc<dyn HttpLayerFactory>>,
        client_builder_configurator: Option<Arc<dyn ClientBuilderConfigurator>>,
    ) -> Self {
        Self {
            url,
            username,
            password,
            http_layer_factory,
            client_builder_configurator,
        }
    }

    /// Create a new builder with no parameters set.
    pub fn builder() -> ClientParametersBuilder {
        ClientParametersBuilder::new()
    }

    /// The URL of the management API.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// The username to use when authenticating.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// The password to use when authenticating.
    pub fn password(&self) -> &str {
        &self.password
    }

    /// The factory used by the client to build its HTTP layer, if any.
    pub fn http_layer_factory(&self) -> Option<&Arc<dyn HttpLayerFactory>> {
        self.http_layer_factory.as_ref()
    }

    /// The legacy hook that post-configures the underlying
    /// [`reqwest::ClientBuilder`], if any.
    #[deprecated(note = "use `http_layer_factory` instead")]
    pub fn client_builder_configurator(&self) -> Option<&Arc<dyn ClientBuilderConfigurator>> {
        self.client_builder_configurator.as_ref()
    }
}

impl fmt::Debug for ClientParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientParameters")
            .field("url", &self.url.as_str())
            .field("username", &self.username)
            .field("http_layer_factory", &self.http_layer_factory.is_some())
            .finish()
    }
}
