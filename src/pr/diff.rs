use super::types::FileDiff;

/// Split a raw unified diff into one entry per changed file, filtered to
/// the given extension set.
///
/// The diff generator emits a `diff --git a/{path} b/{path}` header before
/// each file's hunks, so splitting on that token yields one block per file
/// (plus a leading block of empty text or boilerplate, which is dropped).
///
/// Per block: the path comes from the first line starting with `a/` or
/// `b/` — its first whitespace-delimited token minus the two-character
/// prefix. Blocks with no such line (binary-only entries) are skipped.
/// Extension matching is a case-sensitive suffix check. The body is every
/// line of the block except the header line, rejoined with newlines, so
/// hunk headers and +/- markers pass through untouched.
///
/// Entries keep block-encounter order. If the same path shows up in two
/// blocks, the later block wins in both value and position.
pub fn partition_by_file(raw_diff: &str, extensions: &[String]) -> Vec<FileDiff> {
    let mut files: Vec<FileDiff> = Vec::new();

    for block in raw_diff.split("diff --git") {
        let block = block.trim();
        if block.is_empty() {
            continue;
        }

        let lines: Vec<&str> = block.lines().collect();

        let Some(header) = lines
            .iter()
            .find(|line| line.starts_with("a/") || line.starts_with("b/"))
        else {
            continue;
        };

        let Some(token) = header.split_whitespace().next() else {
            continue;
        };
        let path = &token[2..];

        if !extensions.iter().any(|ext| path.ends_with(ext.as_str())) {
            continue;
        }

        let body = lines[1..].join("\n");

        // Last occurrence wins, taking the later block's position.
        files.retain(|file| file.path != path);
        files.push(FileDiff {
            path: path.to_string(),
            body,
        });
    }

    files
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_extensions() -> Vec<String> {
        [".py", ".js", ".java", ".cpp", ".cs"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    const SAMPLE_DIFF: &str = r#"diff --git a/src/x.py b/src/x.py
index abc1234..def5678 100644
--- a/src/x.py
+++ b/src/x.py
@@ -1,3 +1,4 @@
 def main():
-    print("old")
+    print("new")
+    return 0
diff --git a/README.md b/README.md
index 1111111..2222222 100644
--- a/README.md
+++ b/README.md
@@ -1 +1,2 @@
 # Title
+More docs.
diff --git a/web/app.js b/web/app.js
index 3333333..4444444 100644
--- a/web/app.js
+++ b/web/app.js
@@ -1,2 +1,2 @@
-var x = 1;
+let x = 1;
"#;

    #[test]
    fn test_partition_filters_by_extension() {
        let files = partition_by_file(SAMPLE_DIFF, &default_extensions());
        assert_eq!(files.len(), 2);
        assert_eq!(files[0].path, "src/x.py");
        assert_eq!(files[1].path, "web/app.js");
        assert!(files.iter().all(|f| !f.path.ends_with(".md")));
    }

    #[test]
    fn test_partition_extracts_path_from_header() {
        let files = partition_by_file(SAMPLE_DIFF, &default_extensions());
        assert_eq!(files[0].path, "src/x.py");
    }

    #[test]
    fn test_partition_body_skips_header_line_only() {
        let files = partition_by_file(SAMPLE_DIFF, &default_extensions());
        let expected = "index abc1234..def5678 100644\n\
                        --- a/src/x.py\n\
                        +++ b/src/x.py\n\
                        @@ -1,3 +1,4 @@\n \
                        def main():\n\
                        -    print(\"old\")\n\
                        +    print(\"new\")\n\
                        +    return 0";
        assert_eq!(files[0].body, expected);
    }

    #[test]
    fn test_partition_bodies_round_trip_multi_file() {
        // With every fixture extension accepted, joining the per-file
        // bodies in order reproduces the fixture minus its header lines.
        let extensions: Vec<String> = [".py", ".md", ".js"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let files = partition_by_file(SAMPLE_DIFF, &extensions);
        assert_eq!(files.len(), 3);

        let joined = files
            .iter()
            .map(|f| f.body.as_str())
            .collect::<Vec<_>>()
            .join("\n");
        let expected = SAMPLE_DIFF
            .lines()
            .filter(|line| !line.starts_with("diff --git"))
            .collect::<Vec<_>>()
            .join("\n");
        assert_eq!(joined, expected);
    }

    #[test]
    fn test_partition_accepted_and_rejected_pair() {
        let diff = "diff --git a/a.py b/a.py\n\
                    --- a/a.py\n\
                    +++ b/a.py\n\
                    @@ -1 +1 @@\n\
                    -x = 1\n\
                    +x = 2\n\
                    diff --git a/a.png b/a.png\n\
                    Binary files a/a.png and b/a.png differ\n";
        let files = partition_by_file(diff, &default_extensions());
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].path, "a.py");
        assert_eq!(
            files[0].body,
            "--- a/a.py\n+++ b/a.py\n@@ -1 +1 @@\n-x = 1\n+x = 2"
        );
    }

    #[test]
    fn test_partition_skips_block_without_path_marker() {
        let diff = "diff --git\nsomething without a path marker\n";
        let files = partition_by_file(diff, &default_extensions());
        assert!(files.is_empty());
    }

    #[test]
    fn test_partition_empty_diff() {
        assert!(partition_by_file("", &default_extensions()).is_empty());
        assert!(partition_by_file("   \n  ", &default_extensions()).is_empty());
    }

    #[test]
    fn test_partition_duplicate_path_last_wins() {
        let diff = "diff --git a/a.py b/a.py\n\
                    +first = 1\n\
                    diff --git a/b.py b/b.py\n\
                    +other = 2\n\
                    diff --git a/a.py b/a.py\n\
                    +second = 3\n";
        let files = partition_by_file(diff, &default_extensions());
        assert_eq!(files.len(), 2);
        assert_eq!(files[0].path, "b.py");
        assert_eq!(files[1].path, "a.py");
        assert_eq!(files[1].body, "+second = 3");
    }

    #[test]
    fn test_partition_preserves_block_order() {
        let files = partition_by_file(SAMPLE_DIFF, &default_extensions());
        let paths: Vec<&str> = files.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(paths, vec!["src/x.py", "web/app.js"]);
    }

    #[test]
    fn test_partition_custom_extensions() {
        let extensions = vec![".md".to_string()];
        let files = partition_by_file(SAMPLE_DIFF, &extensions);
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].path, "README.md");
    }

    #[test]
    fn test_extension_match_is_case_sensitive() {
        let diff = "diff --git a/a.PY b/a.PY\n+x = 1\n";
        let files = partition_by_file(diff, &default_extensions());
        assert!(files.is_empty());
    }
}
