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

use thiserror::Error;

/// The error type for client configuration and the HTTP layer.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The supplied string does not parse as a well-formed URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
    /// A mandatory client parameter is unset or empty.
    #[error("Missing required field: {0}")]
    MissingRequiredField(&'static str),
    /// The HTTP request could not be performed.
    #[error("Invalid HTTP request")]
    HttpRequestError,
    /// The HTTP response indicated a failure status.
    #[error("HTTP response error, status: {0}, reason: {1}")]
    HttpResponseError(u16, String),
    /// The HTTP response body could not be deserialized.
    #[error("Invalid JSON response")]
    InvalidJsonResponse,
}
