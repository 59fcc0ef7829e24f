use std::future::Future;
use std::net::SocketAddr;
use std::process::Stdio;
use std::sync::Arc;
use std::time::{Duration, Instant};
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use actix_web::dev::ServerHandle;
use actix_web::http::header;
use actix_web::http::header::ContentType;
use actix_web::web::{Data, ServiceConfig};
use log::{debug, info};
use serde_json::json;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use crate::apply::enums::apply_status::ApplyStatus;
use crate::apply::structs::apply_response::ApplyResponse;
use crate::apply::structs::apply_service_data::ApplyServiceData;
use crate::config::structs::configuration::Configuration;

pub fn apply_service_routes(data: Arc<ApplyServiceData>) -> Box<dyn Fn(&mut ServiceConfig)>
{
    Box::new(move |cfg: &mut ServiceConfig| {
        cfg.app_data(Data::new(Arc::clone(&data)));
        cfg.default_service(web::route().to(api_service_not_found));
        cfg.service(web::resource("/apply").route(web::post().to(api_service_apply)));
    })
}

#[tracing::instrument(level = "debug", skip_all)]
pub async fn api_service_apply(
    request: HttpRequest,
    payload: web::Payload,
    data: Data<Arc<ApplyServiceData>>,
) -> HttpResponse {
    let authorization = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok());
    if !data.token_holder.authorize(authorization) {
        return HttpResponse::Forbidden().finish();
    }

    let body = match payload.to_bytes_limited(data.max_body_size).await {
        Ok(Ok(body)) => body,
        Ok(Err(_)) => {
            return HttpResponse::BadRequest().body("Invalid request body");
        }
        Err(_) => {
            return HttpResponse::PayloadTooLarge().finish();
        }
    };

    let start = Instant::now();
    let response = match run_apply_command(&data.apply_command, &body).await {
        Ok(output) => ApplyResponse::success(output),
        Err((output, error)) => ApplyResponse::failure(output, error),
    };
    info!(
        "[APPLY] apply request status={} duration={:?}",
        response.status,
        start.elapsed()
    );

    match response.status {
        ApplyStatus::Success => {
            HttpResponse::Ok().content_type(ContentType::json()).json(response)
        }
        ApplyStatus::Error => {
            HttpResponse::InternalServerError().content_type(ContentType::json()).json(response)
        }
    }
}

pub async fn api_service_not_found() -> HttpResponse
{
    HttpResponse::NotFound().content_type(ContentType::json()).json(json!({
        "status": "not found"
    }))
}

/// Runs `command` with `body` on stdin.
///
/// Ok carries the trimmed stdout+stderr; Err carries that output and the
/// failure reason (spawn error or non-zero exit status).
pub async fn run_apply_command(command: &[String], body: &[u8]) -> Result<String, (String, String)>
{
    let Some((program, args)) = command.split_first() else {
        return Err((String::new(), String::from("apply command is empty")));
    };

    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .map_err(|e| (String::new(), format!("{}: {}", program, e)))?;

    if let Some(mut stdin) = child.stdin.take() {
        let body = body.to_vec();
        tokio::spawn(async move {
            if let Err(e) = stdin.write_all(&body).await {
                debug!("[APPLY] Writing request body to stdin failed: {}", e);
            }
        });
    }

    let output = child
        .wait_with_output()
        .await
        .map_err(|e| (String::new(), e.to_string()))?;

    let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
    combined.push_str(&String::from_utf8_lossy(&output.stderr));
    let combined = combined.trim().to_string();

    if output.status.success() {
        Ok(combined)
    } else {
        Err((combined, output.status.to_string()))
    }
}

pub fn apply_service(
    addr: SocketAddr,
    server_config: rustls::ServerConfig,
    data: Arc<ApplyServiceData>,
    config: &Configuration,
) -> Result<(ServerHandle, impl Future<Output=Result<(), std::io::Error>> + use<>), std::io::Error>
{
    info!("[APPLY] Starting server listener with SSL on {}", addr);

    let server = HttpServer::new(move || {
        App::new()
            .configure(apply_service_routes(Arc::clone(&data)))
    })
        .keep_alive(Duration::from_secs(config.keep_alive))
        .client_request_timeout(Duration::from_secs(config.request_timeout))
        .client_disconnect_timeout(Duration::from_secs(config.disconnect_timeout))
        .workers(config.workers as usize)
        .shutdown_timeout(5)
        .bind_rustls_0_23((addr.ip(), addr.port()), server_config)?
        .disable_signals()
        .run();

    Ok((server.handle(), server))
}
