//! Authentication header construction.
//!
//! Every request sent by [`Client`](crate::Client) carries exactly one
//! authentication header, produced by a [`Credentials`] implementation.

use std::fmt;

use base64::Engine;

/// Header used by domain-token authentication.
pub const HTTP_HEADER_DOMAIN_TOKEN: &str = "X-DNSimple-Domain-Token";

/// Standard authorization header used by basic and OAuth authentication.
pub const HTTP_HEADER_AUTHORIZATION: &str = "Authorization";

/// Something that can authenticate a request to the API.
pub trait Credentials: fmt::Debug + Send + Sync {
    /// Returns the header name and value to attach to a request.
    fn header_field(&self) -> (&'static str, String);
}

/// Domain token credentials, scoped to a single domain.
#[derive(Clone)]
pub struct DomainTokenCredentials {
    domain_token: String,
}

impl DomainTokenCredentials {
    pub fn new(domain_token: &str) -> Self {
        Self {
            domain_token: domain_token.to_string(),
        }
    }
}

impl Credentials for DomainTokenCredentials {
    fn header_field(&self) -> (&'static str, String) {
        (HTTP_HEADER_DOMAIN_TOKEN, self.domain_token.clone())
    }
}

impl fmt::Debug for DomainTokenCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DomainTokenCredentials")
            .field("domain_token", &"[redacted]")
            .finish()
    }
}

/// HTTP basic credentials (account email and password).
#[derive(Clone)]
pub struct HttpBasicCredentials {
    email: String,
    password: String,
}

impl HttpBasicCredentials {
    pub fn new(email: &str, password: &str) -> Self {
        Self {
            email: email.to_string(),
            password: password.to_string(),
        }
    }
}

impl Credentials for HttpBasicCredentials {
    fn header_field(&self) -> (&'static str, String) {
        let encoded = base64::engine::general_purpose::STANDARD
            .encode(format!("{}:{}", self.email, self.password));
        (HTTP_HEADER_AUTHORIZATION, format!("Basic {}", encoded))
    }
}

impl fmt::Debug for HttpBasicCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpBasicCredentials")
            .field("email", &self.email)
            .field("password", &"[redacted]")
            .finish()
    }
}

/// OAuth access token credentials, sent as a bearer token.
#[derive(Clone)]
pub struct OauthTokenCredentials {
    oauth_token: String,
}

impl OauthTokenCredentials {
    pub fn new(oauth_token: &str) -> Self {
        Self {
            oauth_token: oauth_token.to_string(),
        }
    }
}

impl Credentials for OauthTokenCredentials {
    fn header_field(&self) -> (&'static str, String) {
        (HTTP_HEADER_AUTHORIZATION, format!("Bearer {}", self.oauth_token))
    }
}

impl fmt::Debug for OauthTokenCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OauthTokenCredentials")
            .field("oauth_token", &"[redacted]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_header(credentials: &dyn Credentials, expected_name: &str, expected_value: &str) {
        let (name, value) = credentials.header_field();
        assert_eq!(name, expected_name);
        assert_eq!(value, expected_value);
    }

    #[test]
    fn domain_token_header() {
        let credentials = DomainTokenCredentials::new("domain-token");
        assert_header(&credentials, HTTP_HEADER_DOMAIN_TOKEN, "domain-token");
    }

    #[test]
    fn http_basic_header() {
        let credentials = HttpBasicCredentials::new("email", "password");
        assert_header(
            &credentials,
            HTTP_HEADER_AUTHORIZATION,
            "Basic ZW1haWw6cGFzc3dvcmQ=",
        );
    }

    #[test]
    fn oauth_token_header() {
        let credentials = OauthTokenCredentials::new("oauth-token");
        assert_header(&credentials, HTTP_HEADER_AUTHORIZATION, "Bearer oauth-token");
    }

    #[test]
    fn debug_output_hides_secrets() {
        let basic = format!("{:?}", HttpBasicCredentials::new("email", "hunter2"));
        assert!(basic.contains("email"));
        assert!(!basic.contains("hunter2"));

        let oauth = format!("{:?}", OauthTokenCredentials::new("secret-token"));
        assert!(!oauth.contains("secret-token"));

        let domain = format!("{:?}", DomainTokenCredentials::new("secret-domain"));
        assert!(!domain.contains("secret-domain"));
    }
}
