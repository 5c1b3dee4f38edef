#[cfg(test)]
mod tests {
    use stencil_inputs::{INPUTS_FILE, InputsError, InputsStore, read_all};

    // ── Open / create ──────────────────────────────────────────

    #[test]
    fn test_open_creates_file_and_parents() {
        let dir = tempfile::tempdir().unwrap();
        let store = InputsStore::open(dir.path()).unwrap();
        assert!(dir.path().join(INPUTS_FILE).exists());
        assert!(store.is_empty());
        assert!(store.snapshot().is_empty());
    }

    #[test]
    fn test_open_existing_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(INPUTS_FILE);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "topic: AI Research\naudience: 'beginners'\n").unwrap();

        let store = InputsStore::open(dir.path()).unwrap();
        assert_eq!(store.get("topic").unwrap(), "AI Research");
        assert_eq!(store.get("audience").unwrap(), "beginners");
        assert_eq!(store.len(), 2);
        assert_eq!(store.path(), path);
    }

    #[test]
    fn test_comment_only_document_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(INPUTS_FILE);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "# inputs go here\n").unwrap();

        let store = InputsStore::open(dir.path()).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_invalid_document_is_a_validation_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(INPUTS_FILE);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "topic: [unclosed\n").unwrap();

        let err = InputsStore::open(dir.path()).unwrap_err();
        assert!(matches!(err, InputsError::Validation { .. }));
        assert!(err.to_string().contains("inputs.yaml"));
    }

    #[test]
    fn test_non_string_value_is_a_validation_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(INPUTS_FILE);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "topic:\n  - a\n  - b\n").unwrap();

        let err = InputsStore::open(dir.path()).unwrap_err();
        assert!(matches!(err, InputsError::Validation { .. }));
    }

    // ── In-memory mutation ─────────────────────────────────────

    #[test]
    fn test_get_missing_key() {
        let dir = tempfile::tempdir().unwrap();
        let store = InputsStore::open(dir.path()).unwrap();
        let err = store.get("topic").unwrap_err();
        assert!(matches!(err, InputsError::KeyNotFound(ref k) if k == "topic"));
    }

    #[test]
    fn test_contains_after_set_before_save() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = InputsStore::open(dir.path()).unwrap();
        assert!(!store.contains("topic"));
        store.set("topic", "AI Research");
        assert!(store.contains("topic"));
        assert_eq!(store.get("topic").unwrap(), "AI Research");

        // Nothing hits disk until save.
        let on_disk = std::fs::read_to_string(dir.path().join(INPUTS_FILE)).unwrap();
        assert!(on_disk.is_empty());
    }

    #[test]
    fn test_set_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = InputsStore::open(dir.path()).unwrap();
        store.set("topic", "first");
        store.set("topic", "second");
        assert_eq!(store.get("topic").unwrap(), "second");
        assert_eq!(store.len(), 1);
    }

    // ── Save / round-trip ──────────────────────────────────────

    #[test]
    fn test_save_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = InputsStore::open(dir.path()).unwrap();
        store.set("topic", "AI Research");
        store.set("tone", "formal but friendly");
        store.save().unwrap();

        let reopened = InputsStore::open(dir.path()).unwrap();
        assert_eq!(reopened.get("topic").unwrap(), "AI Research");
        assert_eq!(reopened.get("tone").unwrap(), "formal but friendly");
    }

    #[test]
    fn test_save_emits_folded_scalars() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = InputsStore::open(dir.path()).unwrap();
        store.set("topic", "AI Research");
        store.save().unwrap();

        let on_disk = std::fs::read_to_string(dir.path().join(INPUTS_FILE)).unwrap();
        assert!(on_disk.contains("topic: >-"), "document was: {on_disk}");
    }

    #[test]
    fn test_save_rewrites_loaded_values_as_folded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(INPUTS_FILE);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "topic: \"AI Research\"\n").unwrap();

        let store = InputsStore::open(dir.path()).unwrap();
        store.save().unwrap();

        let on_disk = std::fs::read_to_string(&path).unwrap();
        assert!(on_disk.contains("topic: >-"), "document was: {on_disk}");
        let reopened = InputsStore::open(dir.path()).unwrap();
        assert_eq!(reopened.get("topic").unwrap(), "AI Research");
    }

    #[test]
    fn test_multiline_value_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = InputsStore::open(dir.path()).unwrap();
        store.set("outline", "intro\nbody\n\nconclusion");
        store.save().unwrap();

        let reopened = InputsStore::open(dir.path()).unwrap();
        assert_eq!(reopened.get("outline").unwrap(), "intro\nbody\n\nconclusion");
    }

    #[test]
    fn test_empty_value_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = InputsStore::open(dir.path()).unwrap();
        store.set("note", "");
        store.save().unwrap();

        let reopened = InputsStore::open(dir.path()).unwrap();
        assert_eq!(reopened.get("note").unwrap(), "");
    }

    #[test]
    fn test_key_order_preserved_across_save() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = InputsStore::open(dir.path()).unwrap();
        store.set("zeta", "1");
        store.set("alpha", "2");
        store.set("mid", "3");
        store.save().unwrap();

        let reopened = InputsStore::open(dir.path()).unwrap();
        let keys: Vec<String> = reopened.snapshot().keys().cloned().collect();
        assert_eq!(keys, ["zeta", "alpha", "mid"]);
    }

    // ── Scoped edit ────────────────────────────────────────────

    #[test]
    fn test_edit_persists_on_scope_exit() {
        let dir = tempfile::tempdir().unwrap();
        InputsStore::edit(dir.path(), |inputs| {
            inputs.set("topic", "AI Research");
            Ok(())
        })
        .unwrap();

        let reopened = InputsStore::open(dir.path()).unwrap();
        assert_eq!(reopened.get("topic").unwrap(), "AI Research");
    }

    #[test]
    fn test_edit_saves_even_when_closure_errors() {
        let dir = tempfile::tempdir().unwrap();
        let result: Result<(), InputsError> = InputsStore::edit(dir.path(), |inputs| {
            inputs.set("topic", "AI Research");
            Err(InputsError::KeyNotFound("missing".into()))
        });
        assert!(matches!(result, Err(InputsError::KeyNotFound(_))));

        // No rollback: the edit made before the error is on disk.
        let reopened = InputsStore::open(dir.path()).unwrap();
        assert_eq!(reopened.get("topic").unwrap(), "AI Research");
    }

    // ── read_all ───────────────────────────────────────────────

    #[test]
    fn test_read_all() {
        let dir = tempfile::tempdir().unwrap();
        InputsStore::edit(dir.path(), |inputs| {
            inputs.set("topic", "AI Research");
            inputs.set("audience", "beginners");
            Ok(())
        })
        .unwrap();

        let all = read_all(dir.path()).unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all["topic"], "AI Research");
        assert_eq!(all["audience"], "beginners");
    }

    #[test]
    fn test_read_all_missing_document_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let all = read_all(dir.path()).unwrap();
        assert!(all.is_empty());
    }
}
