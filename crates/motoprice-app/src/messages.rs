//! User-facing texts shown by the form front-ends

use std::path::Path;

use motoprice_types::{Error, Resource};

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Banner shown while the placeholder model table is active
pub fn fallback_warning(mapping_path: &Path) -> String {
    format!(
        "File '{}' tidak ditemukan! Aplikasi tidak bisa menampilkan pilihan model motor.",
        file_name(mapping_path)
    )
}

/// Message for a failed submission
pub fn submission_error(err: &Error) -> String {
    match err {
        Error::ConfigurationMissing { path, .. } => format!(
            "GAGAL MEMANGGIL MODEL. File '{}' tidak ditemukan.",
            file_name(path)
        ),
        other => format!("TERJADI ERROR: {}", other),
    }
}

/// Whether the failure is the model artifact being absent
pub fn is_model_unavailable(err: &Error) -> bool {
    err.is_missing(Resource::ModelArtifact)
}
