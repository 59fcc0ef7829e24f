use std::path::{Path, PathBuf};
use std::process::exit;
use std::sync::Arc;
use clap::Parser;
use log::{error, info, warn};
use sentry::ClientInitGuard;
use tokio::runtime::Builder;
use tokio::sync::watch;
use tokio_shutdown::Shutdown;
use certpilot::apply::apply::apply_service;
use certpilot::apply::structs::apply_service_data::ApplyServiceData;
use certpilot::auth::enums::token_source::TokenSource;
use certpilot::auth::structs::auth_token_holder::AuthTokenHolder;
use certpilot::common::common::setup_logging;
use certpilot::config::structs::configuration::Configuration;
use certpilot::reload::enums::bootstrap_error::BootstrapError;
use certpilot::reload::reload::{bootstrap_chain, wait_for_key};
use certpilot::reload::structs::bootstrap_policy::BootstrapPolicy;
use certpilot::reload::structs::reload_scheduler::ReloadScheduler;
use certpilot::ssl::ssl::{create_server_config_with_resolver, dump_certificate_chain, generate_self_signed};
use certpilot::ssl::structs::chain_validator::ChainValidator;
use certpilot::ssl::structs::dynamic_certificate_resolver::DynamicCertificateResolver;
use certpilot::ssl::structs::live_cert_store::LiveCertStore;
use certpilot::structs::Cli;

#[tracing::instrument(level = "debug")]
fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    if args.env {
        println!();
        println!("Environment variables");
        println!("---------------------");
        println!();
        for (name, description) in Configuration::env_help() {
            println!("{:<35}   {}", name, description);
        }
        println!();
        return Ok(());
    }

    if args.create_config {
        return match Configuration::save_from_config(&args.config, &Configuration::init()) {
            Ok(_) => {
                eprintln!("Configuration written to {}, please edit it and start again", args.config);
                Ok(())
            }
            Err(e) => {
                eprintln!("{} could not be created, check permissions...", args.config);
                eprintln!("{e}");
                exit(1)
            }
        };
    }

    let config = match Configuration::load_from_file(&args.config) {
        Ok(config) => Arc::new(config),
        Err(e) => {
            eprintln!("[CONFIG] {}", e);
            exit(101)
        }
    };

    if let Err(e) = setup_logging(&config) {
        eprintln!("{e}");
        exit(1);
    }

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    if args.create_selfsigned {
        return match generate_self_signed(&config.server_name, &config.cert_path, &config.key_path) {
            Ok(_) => Ok(()),
            Err(e) => {
                error!("[CERTGEN] {}", e);
                exit(1)
            }
        };
    }

    #[warn(unused_variables)]
    let _sentry_guard: ClientInitGuard;
    if config.sentry_config.enabled {
        _sentry_guard = sentry::init((config.sentry_config.dsn.clone(), sentry::ClientOptions {
            release: sentry::release_name!(),
            debug: config.sentry_config.debug,
            sample_rate: config.sentry_config.sample_rate,
            max_breadcrumbs: config.sentry_config.max_breadcrumbs,
            attach_stacktrace: config.sentry_config.attach_stacktrace,
            send_default_pii: config.sentry_config.send_default_pii,
            traces_sample_rate: config.sentry_config.traces_sample_rate,
            session_mode: sentry::SessionMode::Request,
            auto_session_tracking: true,
            ..Default::default()
        }));
    }

    Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let (shutdown_tx, shutdown_rx) = watch::channel(false);
            let tokio_shutdown = Shutdown::new().map_err(|e| std::io::Error::other(format!("{e:?}")))?;
            tokio::spawn({
                let shutdown_tx = shutdown_tx.clone();
                async move {
                    tokio_shutdown.handle().await;
                    info!("Shutdown request received, shutting down...");
                    let _ = shutdown_tx.send(true);
                }
            });

            let policy = BootstrapPolicy::default();
            let mut boot_shutdown = shutdown_rx.clone();

            info!("[BOOT] Waiting for TLS key: {}", config.key_path);
            let key_pem = match wait_for_key(Path::new(&config.key_path), &policy, &mut boot_shutdown).await {
                Ok(key_pem) => key_pem,
                Err(BootstrapError::Cancelled) => {
                    info!("[BOOT] Shutdown before the TLS key appeared");
                    return Ok(());
                }
                Err(e) => {
                    error!("[BOOT] {}", e);
                    exit(1);
                }
            };
            let validator = match ChainValidator::from_key_pem(&key_pem, &config.server_name) {
                Ok(validator) => Arc::new(validator),
                Err(e) => {
                    error!("[BOOT] Unusable TLS key {}: {}", config.key_path, e);
                    exit(1);
                }
            };

            let remote = config.remote_peer();
            let (chain, origin) = match bootstrap_chain(Path::new(&config.cert_path), remote.as_ref(), &policy, &mut boot_shutdown).await {
                Ok(result) => result,
                Err(BootstrapError::Cancelled) => {
                    info!("[BOOT] Shutdown before a certificate was acquired");
                    return Ok(());
                }
                Err(e) => {
                    error!("[BOOT] {}", e);
                    exit(1);
                }
            };
            let state = match validator.validate(&chain, origin) {
                Ok(state) => state,
                Err(e) => {
                    error!("[BOOT] Initial certificate rejected: {}", e);
                    exit(1);
                }
            };
            info!("[BOOT] Certificate active from {} (fingerprint {})", state.origin, state.fingerprint);
            dump_certificate_chain(chain.certs());
            let store = Arc::new(LiveCertStore::new(state));

            let token_source = TokenSource::from_config(&config.token, &config.token_file);
            let token_holder = Arc::new(AuthTokenHolder::load(&token_source).await);
            if token_holder.is_enabled() {
                info!("[TOKEN] Bearer token authentication enabled ({})", token_source);
            } else {
                warn!("[TOKEN] No token configured, /apply is not authenticated");
            }

            let resolver = Arc::new(DynamicCertificateResolver::new(Arc::clone(&store)));
            let server_config = create_server_config_with_resolver(resolver).map_err(std::io::Error::other)?;
            let address = config.listen_socket_addr().map_err(std::io::Error::other)?;
            let data = Arc::new(ApplyServiceData {
                token_holder: Arc::clone(&token_holder),
                apply_command: config.apply_command.clone(),
                max_body_size: config.max_body_size,
            });
            let (apply_handle, apply_future) = apply_service(address, server_config, data, &config)?;
            let mut apply_task = tokio::spawn(apply_future);

            info!("[BOOT] Starting certificate reload task with {} seconds delay...", config.check_interval);
            let scheduler = ReloadScheduler::new(
                store,
                validator,
                token_holder,
                token_source,
                PathBuf::from(&config.cert_path),
                remote,
                config.check_interval(),
            );
            let reload_task = tokio::spawn(scheduler.run(shutdown_rx.clone()));

            let mut main_shutdown = shutdown_rx.clone();
            let listener_failed = tokio::select! {
                _ = main_shutdown.wait_for(|stop| *stop) => false,
                result = &mut apply_task => {
                    match result {
                        Ok(Err(e)) => error!("[APPLY] Listener stopped: {}", e),
                        Ok(Ok(())) => warn!("[APPLY] Listener stopped"),
                        Err(e) => error!("[APPLY] Listener task failed: {}", e),
                    }
                    true
                }
            };

            if listener_failed {
                let _ = shutdown_tx.send(true);
            } else {
                info!("[BOOT] Stopping listener...");
                apply_handle.stop(true).await;
                let _ = apply_task.await;
            }

            let _ = reload_task.await;
            info!("Server shutting down completed");
            if listener_failed {
                return Err(std::io::Error::other("TLS listener stopped unexpectedly"));
            }
            Ok(())
        })
}
