// SPDX-License-Identifier: Apache-2.0

use std::time::Duration;

use bijux_rewind_api::{
    ActualizarSolicitudRequest, AdjuntoRequest, BorrarRequest, CrearSolicitudRequest,
    DocumentoDto, EditorInfoDto, EndpointsResponse, EstadoCertificadoResponse, HistorialResponse,
    InsertarRequest, LogResponse, MacroEliminadoResponse, MacroInfoResponse, MacroNombreRequest,
    MacrosResponse, MensajeResponse, MutacionResponse, ReemplazarRequest, SnapshotRequest,
    SnapshotResponse, TiposResponse, SESSION_HEADER,
};
use reqwest::{Client, Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::errors::ClientError;
use crate::DEFAULT_BASE_URL;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub session_id: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(10),
            session_id: None,
        }
    }
}

/// One blocking-style round trip per call. Calls for the same session should
/// not be pipelined; the server serializes them but ordering is the caller's.
#[derive(Debug, Clone)]
pub struct RewindClient {
    http: Client,
    base: Url,
    session_id: Option<String>,
}

impl RewindClient {
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let raw = config.base_url.trim_end_matches('/');
        let base = Url::parse(raw)
            .map_err(|e| ClientError::Transport(format!("invalid base url {raw}: {e}")))?;
        if base.cannot_be_a_base() {
            return Err(ClientError::Transport(format!(
                "base url cannot carry paths: {raw}"
            )));
        }
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ClientError::Transport(format!("http client init failed: {e}")))?;
        Ok(Self {
            http,
            base,
            session_id: config.session_id,
        })
    }

    /// Same connection pool, different session.
    #[must_use]
    pub fn with_session(&self, session_id: impl Into<String>) -> Self {
        Self {
            http: self.http.clone(),
            base: self.base.clone(),
            session_id: Some(session_id.into()),
        }
    }

    #[must_use]
    pub fn session_id(&self) -> Option<&str> {
        self.session_id.as_deref()
    }

    pub async fn endpoints(&self) -> Result<EndpointsResponse, ClientError> {
        self.call(Method::GET, &[], None::<&()>).await
    }

    // Editor session.

    pub async fn texto(&self) -> Result<DocumentoDto, ClientError> {
        self.call(Method::GET, &["command", "texto"], None::<&()>).await
    }

    pub async fn insertar(&self, pos: usize, texto: &str) -> Result<MutacionResponse, ClientError> {
        let body = InsertarRequest {
            pos,
            texto: texto.to_string(),
        };
        self.call(Method::POST, &["command", "insertar"], Some(&body))
            .await
    }

    pub async fn borrar(&self, desde: usize, hasta: usize) -> Result<MutacionResponse, ClientError> {
        let body = BorrarRequest { desde, hasta };
        self.call(Method::POST, &["command", "borrar"], Some(&body))
            .await
    }

    pub async fn reemplazar(
        &self,
        desde: usize,
        len: usize,
        nuevo: &str,
    ) -> Result<MutacionResponse, ClientError> {
        let body = ReemplazarRequest {
            desde,
            len,
            nuevo: nuevo.to_string(),
        };
        self.call(Method::POST, &["command", "reemplazar"], Some(&body))
            .await
    }

    pub async fn deshacer(&self) -> Result<MutacionResponse, ClientError> {
        self.call(Method::POST, &["command", "undo"], None::<&()>)
            .await
    }

    pub async fn rehacer(&self) -> Result<MutacionResponse, ClientError> {
        self.call(Method::POST, &["command", "redo"], None::<&()>)
            .await
    }

    pub async fn info(&self) -> Result<EditorInfoDto, ClientError> {
        self.call(Method::GET, &["command", "info"], None::<&()>).await
    }

    pub async fn log_editor(&self) -> Result<LogResponse, ClientError> {
        self.call(Method::GET, &["command", "log"], None::<&()>).await
    }

    pub async fn grabar_macro(&self, nombre: &str) -> Result<MacroInfoResponse, ClientError> {
        let body = MacroNombreRequest {
            nombre: nombre.to_string(),
        };
        self.call(Method::POST, &["command", "macro", "grabar"], Some(&body))
            .await
    }

    pub async fn finalizar_macro(&self) -> Result<MacroInfoResponse, ClientError> {
        self.call(Method::POST, &["command", "macro", "finalizar"], None::<&()>)
            .await
    }

    pub async fn cancelar_macro(&self) -> Result<MacroInfoResponse, ClientError> {
        self.call(Method::POST, &["command", "macro", "cancelar"], None::<&()>)
            .await
    }

    pub async fn ejecutar_macro(&self, nombre: &str) -> Result<MutacionResponse, ClientError> {
        let body = MacroNombreRequest {
            nombre: nombre.to_string(),
        };
        self.call(Method::POST, &["command", "macro", "ejecutar"], Some(&body))
            .await
    }

    pub async fn macros(&self) -> Result<MacrosResponse, ClientError> {
        self.call(Method::GET, &["command", "macro"], None::<&()>)
            .await
    }

    pub async fn eliminar_macro(&self, nombre: &str) -> Result<MacroEliminadoResponse, ClientError> {
        self.call(Method::DELETE, &["command", "macro", nombre], None::<&()>)
            .await
    }

    pub async fn limpiar_historial_editor(&self) -> Result<MacroInfoResponse, ClientError> {
        self.call(Method::POST, &["command", "historial", "limpiar"], None::<&()>)
            .await
    }

    pub async fn limpiar_log_editor(&self) -> Result<MensajeResponse, ClientError> {
        self.call(Method::POST, &["command", "log", "limpiar"], None::<&()>)
            .await
    }

    pub async fn limpiar_documento(&self) -> Result<MutacionResponse, ClientError> {
        self.call(Method::POST, &["command", "documento", "limpiar"], None::<&()>)
            .await
    }

    pub async fn reiniciar(&self) -> Result<MensajeResponse, ClientError> {
        self.call(Method::POST, &["command", "reiniciar"], None::<&()>)
            .await
    }

    // Certificate session.

    pub async fn estado(&self) -> Result<EstadoCertificadoResponse, ClientError> {
        self.call(Method::GET, &["memento", "estado"], None::<&()>)
            .await
    }

    pub async fn crear_solicitud(
        &self,
        req: &CrearSolicitudRequest,
    ) -> Result<EstadoCertificadoResponse, ClientError> {
        self.call(Method::POST, &["memento", "solicitud"], Some(req))
            .await
    }

    pub async fn actualizar_solicitud(
        &self,
        req: &ActualizarSolicitudRequest,
    ) -> Result<EstadoCertificadoResponse, ClientError> {
        self.call(Method::PUT, &["memento", "solicitud"], Some(req))
            .await
    }

    pub async fn agregar_adjunto(
        &self,
        req: &AdjuntoRequest,
    ) -> Result<EstadoCertificadoResponse, ClientError> {
        self.call(Method::POST, &["memento", "adjunto"], Some(req))
            .await
    }

    pub async fn generar_certificado(&self) -> Result<EstadoCertificadoResponse, ClientError> {
        self.call(Method::POST, &["memento", "generar"], None::<&()>)
            .await
    }

    pub async fn firmar_certificado(&self) -> Result<EstadoCertificadoResponse, ClientError> {
        self.call(Method::POST, &["memento", "firmar"], None::<&()>)
            .await
    }

    pub async fn deshacer_certificado(&self) -> Result<EstadoCertificadoResponse, ClientError> {
        self.call(Method::POST, &["memento", "undo"], None::<&()>)
            .await
    }

    pub async fn rehacer_certificado(&self) -> Result<EstadoCertificadoResponse, ClientError> {
        self.call(Method::POST, &["memento", "redo"], None::<&()>)
            .await
    }

    pub async fn historial(&self) -> Result<HistorialResponse, ClientError> {
        self.call(Method::GET, &["memento", "historial"], None::<&()>)
            .await
    }

    pub async fn limpiar_historial_certificado(&self) -> Result<MensajeResponse, ClientError> {
        self.call(Method::POST, &["memento", "historial", "limpiar"], None::<&()>)
            .await
    }

    pub async fn crear_snapshot(&self, etiqueta: &str) -> Result<SnapshotResponse, ClientError> {
        let body = SnapshotRequest {
            etiqueta: etiqueta.to_string(),
        };
        self.call(Method::POST, &["memento", "snapshot"], Some(&body))
            .await
    }

    pub async fn log_certificado(&self) -> Result<LogResponse, ClientError> {
        self.call(Method::GET, &["memento", "log"], None::<&()>).await
    }

    pub async fn tipos(&self) -> Result<TiposResponse, ClientError> {
        self.call(Method::GET, &["memento", "tipos"], None::<&()>)
            .await
    }

    fn url(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = self.base.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|()| ClientError::Transport(format!("base url cannot carry paths: {}", self.base)))?;
            path.pop_if_empty();
            path.extend(segments);
        }
        Ok(url)
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        let builder = self.http.request(method, url);
        match &self.session_id {
            Some(id) => builder.header(SESSION_HEADER, id),
            None => builder,
        }
    }

    async fn call<B, T>(
        &self,
        method: Method,
        segments: &[&str],
        body: Option<&B>,
    ) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(segments)?;
        let mut builder = self.request(method.clone(), url.clone());
        if let Some(body) = body {
            builder = builder.json(body);
        }
        let response = builder.send().await?;
        let status = response.status();
        debug!(method = %method, url = %url, status = status.as_u16(), "rewind call");
        if status.is_success() {
            let bytes = response.bytes().await?;
            serde_json::from_slice(&bytes).map_err(|e| ClientError::Decode(e.to_string()))
        } else {
            let text = response.text().await?;
            Err(ClientError::from_error_body(status.as_u16(), &text))
        }
    }
}
