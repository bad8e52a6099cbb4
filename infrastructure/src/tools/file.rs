//! File operation tools: list_files, read_file, write_file
//!
//! Every handler resolves its path through the [`WorkspaceSandbox`] first and
//! folds every failure into an `"Error: ..."` result.

use super::sandbox::WorkspaceSandbox;
use pecko_domain::tool::{
    entities::{ToolCall, ToolDefinition, ToolName, ToolParameter},
    value_objects::{ToolError, ToolResult},
};
use std::fs;

/// Maximum file size to read (10 MB)
const MAX_READ_SIZE: u64 = 10 * 1024 * 1024;

pub fn list_files_definition() -> ToolDefinition {
    ToolDefinition::new(
        ToolName::ListFiles,
        "List entries in a workspace directory. The directory must be a relative path \
         inside the workspace (no absolute paths, no ..). Returns a sorted list of \
         entries prefixed with [DIR] or [FILE].",
    )
    .with_parameter(
        ToolParameter::new("directory", "Relative path of the directory to list", false)
            .with_type("path")
            .with_default("."),
    )
}

pub fn read_file_definition() -> ToolDefinition {
    ToolDefinition::new(
        ToolName::ReadFile,
        "Read a UTF-8 text file from the workspace. The path must be relative to the \
         workspace root.",
    )
    .with_parameter(
        ToolParameter::new("file_path", "Relative path of the file to read", true)
            .with_type("path"),
    )
}

pub fn write_file_definition() -> ToolDefinition {
    ToolDefinition::new(
        ToolName::WriteFile,
        "Create or overwrite a UTF-8 text file in the workspace. The path must be \
         relative to the workspace root. Parent directories are created if missing.",
    )
    .with_parameter(
        ToolParameter::new("file_path", "Relative path of the file to write", true)
            .with_type("path"),
    )
    .with_parameter(
        ToolParameter::new("content", "Full content to write to the file", true)
            .with_type("string"),
    )
}

pub fn execute_list_files(sandbox: &WorkspaceSandbox, call: &ToolCall) -> ToolResult {
    let name = ToolName::ListFiles.as_str();
    let directory = call.get_string("directory").unwrap_or(".");

    let target = match sandbox.resolve(directory) {
        Ok(p) => p,
        Err(e) => return ToolResult::failure_lines(name, e.into()),
    };

    if !target.is_dir() {
        return ToolResult::failure_lines(
            name,
            ToolError::invalid_argument(format!("{} is not a directory", directory)),
        );
    }

    let entries = match fs::read_dir(&target) {
        Ok(entries) => entries,
        Err(e) => {
            return ToolResult::failure_lines(
                name,
                ToolError::execution_failed(format!("could not list {}: {}", directory, e)),
            );
        }
    };

    let mut items = Vec::new();
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                return ToolResult::failure_lines(
                    name,
                    ToolError::execution_failed(format!("could not list {}: {}", directory, e)),
                );
            }
        };
        if sandbox.is_reserved(&entry.path()) {
            continue;
        }
        let prefix = if entry.path().is_dir() { "[DIR]" } else { "[FILE]" };
        items.push(format!("{} {}", prefix, entry.file_name().to_string_lossy()));
    }
    items.sort();

    ToolResult::lines(name, items)
}

pub fn execute_read_file(sandbox: &WorkspaceSandbox, call: &ToolCall) -> ToolResult {
    let name = ToolName::ReadFile.as_str();
    let file_path = match call.require_string("file_path") {
        Ok(p) => p,
        Err(e) => return ToolResult::failure(name, ToolError::invalid_argument(e)),
    };

    let target = match sandbox.resolve(file_path) {
        Ok(p) => p,
        Err(e) => return ToolResult::failure(name, e.into()),
    };

    if !target.is_file() {
        return ToolResult::failure(
            name,
            ToolError::not_found(format!("{} is not a file or does not exist.", file_path)),
        );
    }

    match fs::metadata(&target) {
        Ok(metadata) if metadata.len() > MAX_READ_SIZE => {
            return ToolResult::failure(
                name,
                ToolError::invalid_argument(format!(
                    "{} is too large ({} bytes, maximum is {} bytes)",
                    file_path,
                    metadata.len(),
                    MAX_READ_SIZE
                )),
            );
        }
        Ok(_) => {}
        Err(e) => {
            return ToolResult::failure(
                name,
                ToolError::execution_failed(format!("could not read {}: {}", file_path, e)),
            );
        }
    }

    match fs::read_to_string(&target) {
        Ok(content) => ToolResult::success(name, content),
        Err(e) => ToolResult::failure(
            name,
            ToolError::execution_failed(format!("could not read {}: {}", file_path, e)),
        ),
    }
}

pub fn execute_write_file(sandbox: &WorkspaceSandbox, call: &ToolCall) -> ToolResult {
    let name = ToolName::WriteFile.as_str();
    let file_path = match call.require_string("file_path") {
        Ok(p) => p,
        Err(e) => return ToolResult::failure(name, ToolError::invalid_argument(e)),
    };
    let content = match call.require_string("content") {
        Ok(c) => c,
        Err(e) => return ToolResult::failure(name, ToolError::invalid_argument(e)),
    };

    let target = match sandbox.resolve(file_path) {
        Ok(p) => p,
        Err(e) => return ToolResult::failure(name, e.into()),
    };

    if target.is_dir() {
        return ToolResult::failure(
            name,
            ToolError::invalid_argument(format!("{} is a directory", file_path)),
        );
    }

    if let Some(parent) = target.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        return ToolResult::failure(
            name,
            ToolError::execution_failed(format!(
                "could not create parent directories for {}: {}",
                file_path, e
            )),
        );
    }

    if let Err(e) = fs::write(&target, content) {
        return ToolResult::failure(
            name,
            ToolError::execution_failed(format!("could not write {}: {}", file_path, e)),
        );
    }

    ToolResult::success(name, format!("Successfully wrote to {}", file_path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::{TempDir, tempdir};

    fn workspace() -> (TempDir, WorkspaceSandbox) {
        let dir = tempdir().unwrap();
        let sandbox = WorkspaceSandbox::new(dir.path()).unwrap();
        (dir, sandbox)
    }

    fn write(path: &str, content: &str) -> ToolCall {
        ToolCall::new("w", "write_file")
            .with_arg("file_path", path)
            .with_arg("content", content)
    }

    fn read(path: &str) -> ToolCall {
        ToolCall::new("r", "read_file").with_arg("file_path", path)
    }

    #[test]
    fn test_list_files_sorted_with_prefixes() {
        let (dir, sandbox) = workspace();
        fs::create_dir(dir.path().join("src")).unwrap();
        fs::write(dir.path().join("b.txt"), "").unwrap();
        fs::write(dir.path().join("a.txt"), "").unwrap();

        let result = execute_list_files(&sandbox, &ToolCall::new("l", "list_files"));

        assert!(result.is_success());
        let lines = result.output.as_lines().unwrap();
        assert_eq!(lines, ["[DIR] src", "[FILE] a.txt", "[FILE] b.txt"]);
        let mut sorted = lines.to_vec();
        sorted.sort();
        assert_eq!(lines, sorted.as_slice());
    }

    #[test]
    fn test_list_files_outside_root() {
        let (dir, sandbox) = workspace();
        fs::write(dir.path().join("keep.txt"), "x").unwrap();

        let call = ToolCall::new("l", "list_files").with_arg("directory", "../etc");
        let result = execute_list_files(&sandbox, &call);

        assert!(!result.is_success());
        let lines = result.output.as_lines().unwrap();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("Error: "));
        assert!(lines[0].ends_with("outside the workspace root"));
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_list_files_not_a_directory() {
        let (dir, sandbox) = workspace();
        fs::write(dir.path().join("file.txt"), "x").unwrap();

        let call = ToolCall::new("l", "list_files").with_arg("directory", "file.txt");
        let result = execute_list_files(&sandbox, &call);

        assert_eq!(
            result.output.as_lines().unwrap(),
            ["Error: file.txt is not a directory"]
        );
    }

    #[test]
    fn test_write_then_read() {
        let (dir, sandbox) = workspace();

        let written = execute_write_file(&sandbox, &write("docs/notes.txt", "hello"));
        assert!(written.is_success());
        assert_eq!(written.content(), "Successfully wrote to docs/notes.txt");
        assert!(dir.path().join("docs").is_dir());

        let read_back = execute_read_file(&sandbox, &read("docs/notes.txt"));
        assert_eq!(read_back.content(), "hello");
    }

    #[test]
    fn test_write_is_idempotent() {
        let (dir, sandbox) = workspace();

        let first = execute_write_file(&sandbox, &write("a.txt", "same"));
        let second = execute_write_file(&sandbox, &write("a.txt", "same"));

        assert!(first.is_success() && second.is_success());
        assert_eq!(first.content(), second.content());
        assert_eq!(fs::read_to_string(dir.path().join("a.txt")).unwrap(), "same");
    }

    #[test]
    fn test_write_rejects_escape_without_mutation() {
        let (dir, sandbox) = workspace();

        for path in ["../evil.txt", "/tmp/evil.txt", "sub/../../evil.txt"] {
            let result = execute_write_file(&sandbox, &write(path, "x"));
            assert!(!result.is_success());
            assert!(result.content().starts_with("Error: "));
            assert_eq!(result.error().unwrap().code, "OUTSIDE_WORKSPACE");
        }
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_metadata_dir_is_off_limits() {
        let (dir, sandbox) = workspace();
        crate::workspace::init_workspace(dir.path(), false).unwrap();
        let config = crate::workspace::config_path(dir.path());
        let before = fs::read_to_string(&config).unwrap();

        let written = execute_write_file(
            &sandbox,
            &write(".pecko/config.toml", "active_profile = \"evil\""),
        );
        assert!(!written.is_success());
        assert_eq!(written.error().unwrap().code, "NOT_ALLOWED");
        assert_eq!(fs::read_to_string(&config).unwrap(), before);

        let read_back = execute_read_file(&sandbox, &read("./.pecko/config.toml"));
        assert!(read_back.content().starts_with("Error: "));
        assert!(!read_back.content().contains("active_profile"));

        fs::write(dir.path().join("notes.txt"), "").unwrap();
        let listed = execute_list_files(&sandbox, &ToolCall::new("l", "list_files"));
        assert_eq!(listed.output.as_lines().unwrap(), ["[FILE] notes.txt"]);

        let call = ToolCall::new("l", "list_files").with_arg("directory", ".pecko");
        assert!(!execute_list_files(&sandbox, &call).is_success());
    }

    #[test]
    fn test_read_missing_file() {
        let (_dir, sandbox) = workspace();

        let result = execute_read_file(&sandbox, &read("nope.txt"));

        assert_eq!(
            result.content(),
            "Error: nope.txt is not a file or does not exist."
        );
        assert_eq!(result.error().unwrap().code, "NOT_FOUND");
    }

    #[test]
    fn test_read_rejects_parent_traversal() {
        let (_dir, sandbox) = workspace();

        let result = execute_read_file(&sandbox, &read("../secret"));
        assert!(result.content().contains("outside the workspace root"));
    }

    #[test]
    fn test_read_invalid_utf8() {
        let (dir, sandbox) = workspace();
        fs::write(dir.path().join("blob.bin"), [0xff, 0xfe, 0x00]).unwrap();

        let result = execute_read_file(&sandbox, &read("blob.bin"));
        assert!(!result.is_success());
        assert!(result.content().starts_with("Error: "));
    }

    #[test]
    fn test_write_missing_argument() {
        let (_dir, sandbox) = workspace();
        let call = ToolCall::new("w", "write_file").with_arg("file_path", "a.txt");

        let result = execute_write_file(&sandbox, &call);
        assert_eq!(result.error().unwrap().code, "INVALID_ARGUMENT");
    }
}
