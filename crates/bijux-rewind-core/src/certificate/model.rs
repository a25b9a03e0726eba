// SPDX-License-Identifier: Apache-2.0

use time::OffsetDateTime;

use crate::errors::{Result, RewindError};

pub const TIPOS_CERTIFICADO: [&str; 5] = [
    "Certificado de Estudios",
    "Constancia de Inscripción",
    "Constancia de Egreso",
    "Certificado de Calificaciones",
    "Constancia de Servicio Social",
];

pub const FIELD_MAX_LEN: usize = 256;
pub const OBSERVACIONES_MAX_LEN: usize = 2000;

/// Lifecycle of a certificate request. Transitions only move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EstadoCertificado {
    Borrador,
    Generado,
    Firmado,
}

impl EstadoCertificado {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Borrador => "borrador",
            Self::Generado => "generado",
            Self::Firmado => "firmado",
        }
    }

    pub fn parse(input: &str) -> Result<Self> {
        match input {
            "borrador" => Ok(Self::Borrador),
            "generado" => Ok(Self::Generado),
            "firmado" => Ok(Self::Firmado),
            other => Err(RewindError::Validation(format!(
                "estado de certificado desconocido: {other}"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatosAlumno {
    pub nombre: String,
    pub apellido: String,
    pub matricula: String,
    pub carrera: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Adjunto {
    pub nombre: String,
    pub tipo: String,
    pub url: String,
    pub tamanio: u64,
    pub fecha_carga: OffsetDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solicitud {
    pub id: String,
    pub datos_alumno: DatosAlumno,
    pub tipo_certificado: String,
    pub observaciones: Option<String>,
    pub adjuntos: Vec<Adjunto>,
    pub estado: EstadoCertificado,
    pub folio: Option<String>,
    pub firma: Option<String>,
    pub fecha_creacion: OffsetDateTime,
    pub fecha_modificacion: OffsetDateTime,
}

impl Solicitud {
    /// Stable text rendering hashed into the signature.
    #[must_use]
    pub fn canonical_text(&self) -> String {
        let mut out = format!(
            "id={}\nfolio={}\ntipo={}\nalumno={}|{}|{}|{}|{}\nobservaciones={}\ncreada={}\n",
            self.id,
            self.folio.as_deref().unwrap_or(""),
            self.tipo_certificado,
            self.datos_alumno.nombre,
            self.datos_alumno.apellido,
            self.datos_alumno.matricula,
            self.datos_alumno.carrera,
            self.datos_alumno.email,
            self.observaciones.as_deref().unwrap_or(""),
            self.fecha_creacion.unix_timestamp(),
        );
        for adjunto in &self.adjuntos {
            out.push_str(&format!(
                "adjunto={}|{}|{}|{}\n",
                adjunto.nombre, adjunto.tipo, adjunto.url, adjunto.tamanio
            ));
        }
        out
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NuevaSolicitud {
    pub datos_alumno: DatosAlumno,
    pub tipo_certificado: String,
    pub observaciones: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CambiosSolicitud {
    pub tipo_certificado: Option<String>,
    pub observaciones: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NuevoAdjunto {
    pub nombre: String,
    pub tipo: String,
    pub url: String,
    pub tamanio: u64,
}

impl NuevaSolicitud {
    pub fn validate(&self) -> Result<()> {
        let alumno = &self.datos_alumno;
        required("nombre", &alumno.nombre)?;
        required("apellido", &alumno.apellido)?;
        required("matricula", &alumno.matricula)?;
        required("carrera", &alumno.carrera)?;
        validate_email(&alumno.email)?;
        validate_tipo(&self.tipo_certificado)?;
        validate_observaciones(self.observaciones.as_deref())
    }
}

impl CambiosSolicitud {
    pub fn validate(&self) -> Result<()> {
        if self.tipo_certificado.is_none() && self.observaciones.is_none() {
            return Err(RewindError::validation(
                "no se indicó ningún cambio para la solicitud",
            ));
        }
        if let Some(tipo) = &self.tipo_certificado {
            validate_tipo(tipo)?;
        }
        validate_observaciones(self.observaciones.as_deref())
    }
}

impl NuevoAdjunto {
    pub fn validate(&self) -> Result<()> {
        required("nombre del archivo", &self.nombre)?;
        required("tipo", &self.tipo)?;
        validate_url(&self.url)?;
        if self.tamanio == 0 {
            return Err(RewindError::validation("el tamaño debe ser mayor a 0"));
        }
        Ok(())
    }
}

fn required(field: &str, value: &str) -> Result<()> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(RewindError::Validation(format!("el campo {field} es requerido")));
    }
    if trimmed.chars().count() > FIELD_MAX_LEN {
        return Err(RewindError::Validation(format!(
            "el campo {field} excede {FIELD_MAX_LEN} caracteres"
        )));
    }
    Ok(())
}

fn validate_tipo(tipo: &str) -> Result<()> {
    if TIPOS_CERTIFICADO.contains(&tipo.trim()) {
        Ok(())
    } else {
        Err(RewindError::Validation(format!(
            "tipo de certificado no válido: '{}'",
            tipo.trim()
        )))
    }
}

fn validate_observaciones(observaciones: Option<&str>) -> Result<()> {
    match observaciones {
        Some(text) if text.chars().count() > OBSERVACIONES_MAX_LEN => Err(
            RewindError::Validation(format!(
                "las observaciones exceden {OBSERVACIONES_MAX_LEN} caracteres"
            )),
        ),
        _ => Ok(()),
    }
}

pub(crate) fn validate_email(email: &str) -> Result<()> {
    let invalid = || RewindError::Validation(format!("email inválido: '{email}'"));
    let email = email.trim();
    if email.chars().any(char::is_whitespace) {
        return Err(invalid());
    }
    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.contains('@') {
        return Err(invalid());
    }
    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 || labels.iter().any(|label| label.is_empty()) {
        return Err(invalid());
    }
    Ok(())
}

pub(crate) fn validate_url(url: &str) -> Result<()> {
    let invalid = || RewindError::Validation(format!("URL inválida: '{url}'"));
    let trimmed = url.trim();
    let rest = trimmed
        .strip_prefix("https://")
        .or_else(|| trimmed.strip_prefix("http://"))
        .ok_or_else(invalid)?;
    let host = rest.split(['/', '?', '#']).next().unwrap_or("");
    if host.is_empty() || rest.chars().any(char::is_whitespace) {
        return Err(invalid());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shape_is_checked() {
        assert!(validate_email("ana@uni.mx").is_ok());
        for bad in ["", "ana", "@uni.mx", "ana@uni", "ana@@uni.mx", "ana@.mx", "a na@uni.mx"] {
            assert!(validate_email(bad).is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn url_requires_http_scheme_and_host() {
        assert!(validate_url("https://example.com/documento.pdf").is_ok());
        assert!(validate_url("http://localhost:8080").is_ok());
        for bad in ["ftp://x.org/a", "https://", "example.com", "https:// x.org"] {
            assert!(validate_url(bad).is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn estado_names_roundtrip() {
        for estado in [
            EstadoCertificado::Borrador,
            EstadoCertificado::Generado,
            EstadoCertificado::Firmado,
        ] {
            assert_eq!(EstadoCertificado::parse(estado.as_str()), Ok(estado));
        }
        assert!(EstadoCertificado::parse("anulado").is_err());
    }

    #[test]
    fn empty_change_set_is_rejected() {
        assert!(CambiosSolicitud::default().validate().is_err());
        let cambios = CambiosSolicitud {
            observaciones: Some("urgente".to_string()),
            ..CambiosSolicitud::default()
        };
        assert!(cambios.validate().is_ok());
    }
}
