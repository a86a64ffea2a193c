//! CLI 설정
//!
//! `~/.att/config.json`에 관리자 세션 토큰을 보관합니다 (웹 앱의 쿠키 역할).

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// CLI 설정
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CliConfig {
    /// 저장된 관리자 세션 토큰
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_session: Option<String>,

    #[serde(skip)]
    path: PathBuf,
}

impl CliConfig {
    /// 설정 파일 경로
    fn config_path() -> anyhow::Result<PathBuf> {
        let home = dirs::home_dir().ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?;
        Ok(home.join(".att").join("config.json"))
    }

    /// 설정 로드
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// 지정 경로에서 설정 로드 (없으면 기본값)
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let mut config = if path.exists() {
            let content = std::fs::read_to_string(path)?;
            serde_json::from_str::<CliConfig>(&content)?
        } else {
            Self::default()
        };
        config.path = path.to_path_buf();
        Ok(config)
    }

    /// 설정 저장
    pub fn save(&self) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&self.path, content)?;

        // 세션 토큰이 들어 있으므로 소유자만 읽기/쓰기
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&self.path, std::fs::Permissions::from_mode(0o600))?;
        }
        Ok(())
    }

    /// 관리자 세션 토큰 결정
    pub fn get_admin_session(&self) -> anyhow::Result<String> {
        self.admin_session
            .clone()
            .or_else(|| std::env::var("ATT_ADMIN_SESSION").ok())
            .ok_or_else(|| anyhow::anyhow!("No admin session. Use 'att admin login' first."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = CliConfig::load_from(&dir.path().join("config.json")).unwrap();
        assert!(config.admin_session.is_none());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let mut config = CliConfig::load_from(&path).unwrap();
        config.admin_session = Some("1700000000000.abcd".to_string());
        config.save().unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("adminSession"));

        let reloaded = CliConfig::load_from(&path).unwrap();
        assert_eq!(reloaded.admin_session.as_deref(), Some("1700000000000.abcd"));
    }

    #[cfg(unix)]
    #[test]
    fn test_saved_file_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{}").unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o644)).unwrap();

        let mut config = CliConfig::load_from(&path).unwrap();
        config.admin_session = Some("1700000000000.abcd".to_string());
        config.save().unwrap();

        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
