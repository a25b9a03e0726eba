// SPDX-License-Identifier: Apache-2.0

mod model;
mod session;

pub use model::{
    Adjunto, CambiosSolicitud, DatosAlumno, EstadoCertificado, NuevaSolicitud, NuevoAdjunto,
    Solicitud, FIELD_MAX_LEN, OBSERVACIONES_MAX_LEN, TIPOS_CERTIFICADO,
};
pub use session::CertificateSession;
