// src/config/options.rs
use std::ffi::OsString;
use std::path::{ Path, PathBuf };
use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub endpoint: String,
    pub export: ExportOptions,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            endpoint: s!(API_URL),
            export: ExportOptions::default(),
        }
    }
}

impl AppOptions {
    /// Override the endpoint; blank input keeps the current one.
    pub fn set_endpoint(&mut self, text: &str) {
        let s = text.trim();
        if !s.is_empty() {
            self.endpoint = s!(s);
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    dir: PathBuf,
    file_name: OsString,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_name: OsString::from(EXPORT_FILENAME),
        }
    }
}

impl ExportOptions {
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn out_path(&self) -> PathBuf {
        self.dir.join(&self.file_name)
    }

    /// Parse GUI/CLI text into the export directory. The file name is fixed.
    pub fn set_dir(&mut self, text: &str) {
        let s = text.trim();
        self.dir = if s.is_empty() {
            PathBuf::from(DEFAULT_OUT_DIR)
        } else {
            PathBuf::from(s)
        };
    }

    pub fn mime(&self) -> &'static str {
        EXPORT_MIME
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_out_path_uses_fixed_filename() {
        let export = ExportOptions::default();
        assert_eq!(export.out_path(), Path::new("out").join("gemini-brand-mentions.csv"));
        assert_eq!(export.mime(), "text/csv");
    }

    #[test]
    fn blank_dir_text_resets_to_default() {
        let mut export = ExportOptions::default();
        export.set_dir("  reports/brands ");
        assert_eq!(export.dir(), Path::new("reports/brands"));
        export.set_dir("   ");
        assert_eq!(export.dir(), Path::new(DEFAULT_OUT_DIR));
    }

    #[test]
    fn blank_endpoint_is_ignored() {
        let mut opts = AppOptions::default();
        opts.set_endpoint("");
        assert_eq!(opts.endpoint, API_URL);
        opts.set_endpoint(" http://127.0.0.1:9000/api/check ");
        assert_eq!(opts.endpoint, "http://127.0.0.1:9000/api/check");
    }
}
