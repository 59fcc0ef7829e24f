use crate::ssl::enums::certificate_error::CertificateError;
use crate::ssl::structs::dynamic_certificate_resolver::DynamicCertificateResolver;
use log::{info, warn};
use rcgen::{CertificateParams, KeyPair};
use rustls::crypto::CryptoProvider;
use rustls::pki_types::CertificateDer;
use sha1::Digest as _;
use sha2::Digest as _;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::sync::Arc;
use x509_parser::extensions::{GeneralName, ParsedExtension};
use x509_parser::parse_x509_certificate;

pub fn ring_provider() -> Arc<CryptoProvider> {
    Arc::new(rustls::crypto::ring::default_provider())
}

pub fn create_server_config_with_resolver(
    resolver: Arc<DynamicCertificateResolver>,
) -> Result<rustls::ServerConfig, rustls::Error> {
    Ok(rustls::ServerConfig::builder_with_provider(ring_provider())
        .with_safe_default_protocol_versions()?
        .with_no_client_auth()
        .with_cert_resolver(resolver))
}

pub fn format_hex_with_colon(data: &[u8]) -> String {
    data.iter()
        .map(|byte| format!("{:02x}", byte))
        .collect::<Vec<_>>()
        .join(":")
}

/// Human readable fields of one certificate, in display order.
pub fn describe_certificate(index: usize, der: &CertificateDer<'_>) -> Result<Vec<(&'static str, String)>, CertificateError> {
    let (_, cert) = parse_x509_certificate(der.as_ref())
        .map_err(|e| CertificateError::CertParseError(format!("certificate {}: {}", index, e)))?;

    let mut fields = vec![
        ("Type", if index == 0 { "Leaf" } else { "Intermediate/CA" }.to_string()),
        ("Subject", cert.subject().to_string()),
        ("Issuer", cert.issuer().to_string()),
    ];

    let mut dns = Vec::new();
    let mut ips = Vec::new();
    let mut emails = Vec::new();
    let mut uris = Vec::new();
    if let Ok(Some(san)) = cert.subject_alternative_name() {
        for name in &san.value.general_names {
            match name {
                GeneralName::DNSName(value) => dns.push(value.to_string()),
                GeneralName::RFC822Name(value) => emails.push(value.to_string()),
                GeneralName::URI(value) => uris.push(value.to_string()),
                GeneralName::IPAddress(bytes) => {
                    if let Some(ip) = ip_from_bytes(bytes) {
                        ips.push(ip.to_string());
                    }
                }
                _ => {}
            }
        }
    }
    for (label, values) in [("DNS SANs", dns), ("IP SANs", ips), ("Email SANs", emails), ("URI SANs", uris)] {
        if !values.is_empty() {
            fields.push((label, values.join(" ")));
        }
    }

    fields.push(("Serial", cert.serial.to_string()));
    fields.push(("SHA256 FP", format_hex_with_colon(&sha2::Sha256::digest(der.as_ref()))));
    fields.push(("SHA1 FP", format_hex_with_colon(&sha1::Sha1::digest(der.as_ref()))));

    for extension in cert.extensions() {
        match extension.parsed_extension() {
            ParsedExtension::SubjectKeyIdentifier(ski) => {
                fields.push(("SKI", format_hex_with_colon(ski.0)));
            }
            ParsedExtension::AuthorityKeyIdentifier(aki) => {
                if let Some(key_id) = &aki.key_identifier {
                    fields.push(("AKI", format_hex_with_colon(key_id.0)));
                }
            }
            _ => {}
        }
    }

    let validity = cert.validity();
    for (label, timestamp) in [("NotBefore", validity.not_before.timestamp()), ("NotAfter", validity.not_after.timestamp())] {
        let rendered = chrono::DateTime::from_timestamp(timestamp, 0)
            .map(|dt| dt.to_rfc3339())
            .unwrap_or_else(|| timestamp.to_string());
        fields.push((label, rendered));
    }

    Ok(fields)
}

pub fn dump_certificate_chain(chain: &[CertificateDer<'_>]) {
    info!("[CERTIFICATE] Certificates: {}", chain.len());
    for (index, der) in chain.iter().enumerate() {
        match describe_certificate(index, der) {
            Ok(fields) => {
                info!("[CERTIFICATE] ----- Certificate {} -----", index);
                for (label, value) in fields {
                    info!("[CERTIFICATE] {:<15} : {}", label, value);
                }
            }
            Err(error) => {
                warn!("[CERTIFICATE] {}", error);
            }
        }
    }
}

/// Writes a development key and self-signed certificate for `server_name` and `localhost`.
pub fn generate_self_signed(server_name: &str, cert_path: &str, key_path: &str) -> Result<(), CertificateError> {
    let mut subject_alt_names = vec![String::from("localhost")];
    if server_name != "localhost" {
        subject_alt_names.insert(0, server_name.to_string());
    }

    let key_pair = KeyPair::generate().map_err(|e| CertificateError::GenerationError(e.to_string()))?;
    let cert = CertificateParams::new(subject_alt_names)
        .map_err(|e| CertificateError::GenerationError(e.to_string()))?
        .self_signed(&key_pair)
        .map_err(|e| CertificateError::GenerationError(e.to_string()))?;

    std::fs::write(key_path, key_pair.serialize_pem())
        .map_err(|e| CertificateError::WriteError(format!("{}: {}", key_path, e)))?;
    info!("[CERTGEN] The key file {} has been generated", key_path);
    std::fs::write(cert_path, cert.pem())
        .map_err(|e| CertificateError::WriteError(format!("{}: {}", cert_path, e)))?;
    info!("[CERTGEN] The cert file {} has been generated", cert_path);
    Ok(())
}

fn ip_from_bytes(bytes: &[u8]) -> Option<IpAddr> {
    match bytes.len() {
        4 => <[u8; 4]>::try_from(bytes).ok().map(|octets| IpAddr::V4(Ipv4Addr::from(octets))),
        16 => <[u8; 16]>::try_from(bytes).ok().map(|octets| IpAddr::V6(Ipv6Addr::from(octets))),
        _ => None,
    }
}
