// SPDX-License-Identifier: Apache-2.0

use std::fmt::{Display, Formatter};

use crate::errors::{Result, RewindError};

pub const DEFAULT_SESSION_ID: &str = "default";
pub const SESSION_ID_MAX_LEN: usize = 64;

/// Key of one isolated editor or certificate session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionId(String);

impl SessionId {
    pub fn parse(input: &str) -> Result<Self> {
        let s = input.trim();
        if s.is_empty() {
            return Err(RewindError::validation(
                "el identificador de sesión no puede estar vacío",
            ));
        }
        if s.len() > SESSION_ID_MAX_LEN {
            return Err(RewindError::Validation(format!(
                "el identificador de sesión excede {SESSION_ID_MAX_LEN} caracteres"
            )));
        }
        if !s
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(RewindError::validation(
                "el identificador de sesión solo admite letras, dígitos, '-' y '_'",
            ));
        }
        Ok(Self(s.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self(DEFAULT_SESSION_ID.to_string())
    }
}

impl Display for SessionId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
