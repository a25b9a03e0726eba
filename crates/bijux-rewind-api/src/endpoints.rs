// SPDX-License-Identifier: Apache-2.0

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndpointSpec {
    pub method: &'static str,
    pub path: &'static str,
}

const fn ep(method: &'static str, path: &'static str) -> EndpointSpec {
    EndpointSpec { method, path }
}

/// Every route the server mounts, in registration order.
pub const ENDPOINTS: &[EndpointSpec] = &[
    ep("GET", "/healthz"),
    ep("GET", "/api"),
    ep("GET", "/api/command/texto"),
    ep("POST", "/api/command/insertar"),
    ep("POST", "/api/command/borrar"),
    ep("POST", "/api/command/reemplazar"),
    ep("POST", "/api/command/undo"),
    ep("POST", "/api/command/redo"),
    ep("GET", "/api/command/info"),
    ep("GET", "/api/command/log"),
    ep("POST", "/api/command/macro/grabar"),
    ep("POST", "/api/command/macro/finalizar"),
    ep("POST", "/api/command/macro/cancelar"),
    ep("POST", "/api/command/macro/ejecutar"),
    ep("GET", "/api/command/macro"),
    ep("DELETE", "/api/command/macro/:nombre"),
    ep("POST", "/api/command/historial/limpiar"),
    ep("POST", "/api/command/log/limpiar"),
    ep("POST", "/api/command/documento/limpiar"),
    ep("POST", "/api/command/reiniciar"),
    ep("GET", "/api/memento/estado"),
    ep("POST", "/api/memento/solicitud"),
    ep("PUT", "/api/memento/solicitud"),
    ep("POST", "/api/memento/adjunto"),
    ep("POST", "/api/memento/generar"),
    ep("POST", "/api/memento/firmar"),
    ep("POST", "/api/memento/undo"),
    ep("POST", "/api/memento/redo"),
    ep("GET", "/api/memento/historial"),
    ep("POST", "/api/memento/historial/limpiar"),
    ep("POST", "/api/memento/snapshot"),
    ep("GET", "/api/memento/log"),
    ep("GET", "/api/memento/tipos"),
];
