//! Gateway configuration block generation
//!
//! Pure construction of the marker-delimited export block written into the
//! user's shell profile. No I/O happens here.

/// Substring shared by every marker line, used to detect previously written
/// blocks regardless of which mode produced them
pub const MARKER_TAG: &str = "Vercel AI Gateway for Claude Code";

/// Base URL all gateway traffic is routed through
pub const GATEWAY_BASE_URL: &str = "https://ai-gateway.vercel.sh";

/// Keychain service name the deferred lookup reads the key from
pub const KEYCHAIN_SERVICE: &str = "ANTHROPIC_AUTH_TOKEN";

/// Placeholder the user replaces with their gateway API key
const PLACEHOLDER_KEY: &str = "<YOUR_AI_GATEWAY_API_KEY>";

/// How Claude Code authenticates to the gateway
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatewayMode {
    /// Authenticate with a gateway API key via `ANTHROPIC_AUTH_TOKEN`
    ApiKey,
    /// Proxy a Claude subscription (Max plan) via a custom header
    Max,
}

impl GatewayMode {
    /// The mode name as it appears on the CLI and in marker lines
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ApiKey => "apikey",
            Self::Max => "max",
        }
    }
}

/// Where the rendered block gets its secret expression from.
///
/// Payload-free on purpose: the rendered text can only ever be the fixed
/// placeholder or the fixed keychain lookup, never a caller-supplied value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecretSource {
    /// A literal placeholder the user edits by hand
    Placeholder,
    /// A shell expression that reads the key from the OS keychain at shell
    /// startup
    Keychain,
}

impl SecretSource {
    /// Render the secret expression embedded in the block
    pub fn render(self) -> String {
        match self {
            Self::Placeholder => PLACEHOLDER_KEY.to_string(),
            Self::Keychain => format!(
                r#"$(security find-generic-password -s "{KEYCHAIN_SERVICE}" -a "$USER" -w)"#
            ),
        }
    }
}

/// A marker-delimited run of export lines managed in the shell profile.
///
/// The marker line never appears in the body, and the same marker bounds the
/// block on both sides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigBlock {
    marker: String,
    body: Vec<String>,
}

impl ConfigBlock {
    /// Generate the block for a mode and secret source
    pub fn generate(mode: GatewayMode, source: SecretSource) -> Self {
        let secret = source.render();
        let body = match mode {
            GatewayMode::ApiKey => vec![
                format!(r#"export ANTHROPIC_BASE_URL="{GATEWAY_BASE_URL}""#),
                format!(r#"export ANTHROPIC_AUTH_TOKEN="{secret}""#),
                // Explicit empty override so the auth token takes precedence
                // over a direct API key already present in the environment.
                r#"export ANTHROPIC_API_KEY="""#.to_string(),
            ],
            GatewayMode::Max => vec![
                format!(r#"export ANTHROPIC_BASE_URL="{GATEWAY_BASE_URL}""#),
                format!(r#"export ANTHROPIC_CUSTOM_HEADERS="Authorization: Bearer {secret}""#),
            ],
        };
        Self {
            marker: format!("# {MARKER_TAG} ({})", mode.as_str()),
            body,
        }
    }

    /// The marker line bounding this block
    pub fn marker(&self) -> &str {
        &self.marker
    }

    /// Render the block as written to the profile: a leading blank line, the
    /// marker, the body, and the closing marker, terminated by a newline
    pub fn render(&self) -> String {
        format!(
            "\n{}\n{}\n{}\n",
            self.marker,
            self.body.join("\n"),
            self.marker
        )
    }
}

#[cfg(test)]
#[path = "block_tests.rs"]
mod tests;
