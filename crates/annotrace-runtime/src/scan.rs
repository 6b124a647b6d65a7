use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use annotrace_ingest::{project_name, EVENT_LOG};

use crate::Result;

/// One exported project directory found under the export root.
#[derive(Debug, Clone)]
pub struct ProjectDir {
    pub name: String,
    pub path: PathBuf,
}

impl ProjectDir {
    pub fn event_log_path(&self) -> PathBuf {
        self.path.join(EVENT_LOG)
    }

    pub fn has_event_log(&self) -> bool {
        self.event_log_path().is_file()
    }
}

/// Find exported project directories (direct children of the export root),
/// excluding scratch/demo projects by their banned name markers. Sorted by
/// name so runs are deterministic.
pub fn find_project_dirs(export_root: &Path) -> Result<Vec<ProjectDir>> {
    let mut projects = Vec::new();
    for entry in WalkDir::new(export_root).min_depth(1).max_depth(1) {
        let entry = entry?;
        if !entry.file_type().is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().to_string();
        if project_name::is_banned(&name) {
            continue;
        }
        projects.push(ProjectDir {
            name,
            path: entry.into_path(),
        });
    }
    projects.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(projects)
}

/// Annotated-document JSON files within a project directory. The event log
/// and filesystem litter are not documents.
pub fn document_files(project: &ProjectDir) -> Result<Vec<PathBuf>> {
    let mut documents = Vec::new();
    for entry in WalkDir::new(&project.path).min_depth(1) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy();
        if name == EVENT_LOG || name.contains("DS_Store") || name.starts_with('.') {
            continue;
        }
        documents.push(entry.into_path());
    }
    documents.sort();
    Ok(documents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_banned_directories_are_skipped() -> anyhow::Result<()> {
        let root = TempDir::new()?;
        for name in [
            "Conflict.Attack-gabbard",
            "copy_of_Conflict.Attack-gabbard",
            "sandbox",
        ] {
            fs::create_dir(root.path().join(name))?;
        }
        fs::write(root.path().join("stray-file"), "")?;

        let projects = find_project_dirs(root.path())?;
        let names: Vec<_> = projects.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Conflict.Attack-gabbard"]);
        Ok(())
    }

    #[test]
    fn test_document_files_exclude_event_log() -> anyhow::Result<()> {
        let root = TempDir::new()?;
        let project_path = root.path().join("Conflict.Attack-gabbard");
        fs::create_dir(&project_path)?;
        fs::write(project_path.join("event.log"), "")?;
        fs::write(project_path.join(".DS_Store"), "")?;
        fs::write(project_path.join("doc_1.json"), "{}")?;

        let project = ProjectDir {
            name: "Conflict.Attack-gabbard".to_string(),
            path: project_path,
        };
        let documents = document_files(&project)?;
        assert_eq!(documents.len(), 1);
        assert!(documents[0].ends_with("doc_1.json"));
        assert!(project.has_event_log());
        Ok(())
    }
}
