//! Integration tests for index crate

#[cfg(test)]
mod tests {
    use fidx_errors::IndexError;
    use fidx_index::*;
    use proptest::prelude::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_load_index_from_disk() {
        let dir = tempdir().unwrap();
        let index_path = dir.path().join("FILE_INDEX_SHA256.txt");
        std::fs::write(
            &index_path,
            "# generated\nAAAA  ./bin/tool\nbbbb  lib/data file.bin\n",
        )
        .unwrap();

        let entries = load_index(&index_path).await.unwrap();
        let paths: Vec<_> = entries.iter().map(|e| e.relative_path.as_str()).collect();
        assert_eq!(paths, ["bin/tool", "lib/data file.bin"]);
        assert_eq!(entries[0].expected_digest, "AAAA");
    }

    #[tokio::test]
    async fn test_missing_index_is_unreadable() {
        let dir = tempdir().unwrap();
        let err = load_index(&dir.path().join("nope.txt")).await.unwrap_err();
        assert!(matches!(err, IndexError::Unreadable { .. }));
    }

    #[tokio::test]
    async fn test_non_utf8_index_is_unreadable() {
        let dir = tempdir().unwrap();
        let index_path = dir.path().join("FILE_INDEX_SHA256.txt");
        std::fs::write(&index_path, [0xff, 0xfe, b' ', b'a']).unwrap();

        let err = load_index(&index_path).await.unwrap_err();
        assert!(matches!(err, IndexError::Unreadable { .. }));
    }

    proptest! {
        #[test]
        fn comment_and_blank_lines_yield_nothing(
            lines in prop::collection::vec(
                prop_oneof![
                    "[ \t]*",
                    "[ \t]*#[ -~]*",
                ],
                0..20,
            )
        ) {
            let text = lines.join("\n");
            prop_assert!(parse_index(&text).unwrap().is_empty());
        }

        #[test]
        fn digest_and_path_survive_any_separator(
            digest in "[0-9a-fA-F]{1,64}",
            path in "[a-z0-9_]{1,12}(/[a-z0-9_.]{1,12}){0,3}",
            sep in "[ \t]{1,6}",
            lead in "[ \t]{0,3}",
        ) {
            let text = format!("{lead}{digest}{sep}{path}\n");
            let entries = parse_index(&text).unwrap();
            prop_assert_eq!(entries.len(), 1);
            prop_assert_eq!(&entries[0].expected_digest, &digest);
            prop_assert_eq!(&entries[0].relative_path, &path);
        }
    }
}
