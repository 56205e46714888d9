//! File-based import/export round-trip coverage.

use std::sync::Arc;

use lingua_i18n::{TranslatorRegistry, codec};
use lingua_locale::{BuiltinLocale, LocaleProvider, PluralRule};

fn provider(tag: &str) -> Arc<dyn LocaleProvider> {
    Arc::new(BuiltinLocale::for_tag(tag).unwrap())
}

fn populated_registry() -> TranslatorRegistry {
    let mut registry = TranslatorRegistry::new(provider("en"), [provider("en"), provider("ru")]);

    let en = registry.get_translator_mut("en").unwrap();
    en.add("greeting", "Hello, {0}!", false).unwrap();
    en.add("farewell", "Goodbye, {0}. See you {1}.", false).unwrap();
    en.add_cardinal("days", "{0} day left", PluralRule::One, false)
        .unwrap();
    en.add_cardinal("days", "{0} days left", PluralRule::Other, false)
        .unwrap();
    en.add_ordinal("position", "{0}st", PluralRule::One, false).unwrap();
    en.add_ordinal("position", "{0}nd", PluralRule::Two, false).unwrap();
    en.add_ordinal("position", "{0}rd", PluralRule::Few, false).unwrap();
    en.add_ordinal("position", "{0}th", PluralRule::Other, false).unwrap();
    en.add_range("stay", "{0}-{1} nights", PluralRule::Other, false)
        .unwrap();

    let ru = registry.get_translator_mut("ru").unwrap();
    ru.add_cardinal("files", "{0} файл", PluralRule::One, false).unwrap();
    ru.add_cardinal("files", "{0} файла", PluralRule::Few, false).unwrap();
    ru.add_cardinal("files", "{0} файлов", PluralRule::Many, false).unwrap();
    ru.add_cardinal("files", "{0} файла", PluralRule::Other, false).unwrap();

    registry.verify_all().unwrap();
    registry
}

#[test]
fn export_then_import_preserves_render_output() {
    let source = populated_registry();
    let dir = tempfile::tempdir().unwrap();
    codec::export(&source, dir.path()).unwrap();

    assert!(dir.path().join("en.toml").is_file());
    assert!(dir.path().join("ru.toml").is_file());

    let mut restored = TranslatorRegistry::new(provider("en"), [provider("en"), provider("ru")]);
    codec::import_path(&mut restored, dir.path()).unwrap();
    restored.verify_all().unwrap();

    let (en_src, _) = source.get_translator("en");
    let (en_dst, _) = restored.get_translator("en");
    assert_eq!(
        en_src.translate("greeting", &["World"]).unwrap(),
        en_dst.translate("greeting", &["World"]).unwrap()
    );
    assert_eq!(
        en_src.translate("farewell", &["Bob", "soon"]).unwrap(),
        en_dst.translate("farewell", &["Bob", "soon"]).unwrap()
    );
    for n in [1.0, 2.0, 5.0] {
        assert_eq!(
            en_src.translate_cardinal("days", n, 0, "n").unwrap(),
            en_dst.translate_cardinal("days", n, 0, "n").unwrap()
        );
        assert_eq!(
            en_src.translate_ordinal("position", n, 0, "n").unwrap(),
            en_dst.translate_ordinal("position", n, 0, "n").unwrap()
        );
    }
    assert_eq!(
        en_src.translate_range("stay", 1.0, 0, 3.0, 0, "1", "3").unwrap(),
        en_dst.translate_range("stay", 1.0, 0, 3.0, 0, "1", "3").unwrap()
    );

    let (ru_src, _) = source.get_translator("ru");
    let (ru_dst, _) = restored.get_translator("ru");
    for n in [1.0, 3.0, 5.0, 21.0] {
        assert_eq!(
            ru_src.translate_cardinal("files", n, 0, "n").unwrap(),
            ru_dst.translate_cardinal("files", n, 0, "n").unwrap()
        );
    }
}

#[test]
fn exported_files_are_stable_across_runs() {
    let registry = populated_registry();
    let dir_a = tempfile::tempdir().unwrap();
    let dir_b = tempfile::tempdir().unwrap();
    codec::export(&registry, dir_a.path()).unwrap();
    codec::export(&registry, dir_b.path()).unwrap();

    for locale in ["en", "ru"] {
        let a = std::fs::read_to_string(dir_a.path().join(format!("{locale}.toml"))).unwrap();
        let b = std::fs::read_to_string(dir_b.path().join(format!("{locale}.toml"))).unwrap();
        assert_eq!(a, b);
    }
}

#[test]
fn directory_import_recurses_and_skips_foreign_files() {
    let source = populated_registry();
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("nested");
    std::fs::create_dir(&nested).unwrap();
    codec::export(&source, &nested).unwrap();
    std::fs::write(dir.path().join("notes.txt"), "not a translation file").unwrap();

    let mut restored = TranslatorRegistry::new(provider("en"), [provider("en"), provider("ru")]);
    codec::import_path(&mut restored, dir.path()).unwrap();
    restored.verify_all().unwrap();
    assert_eq!(
        restored
            .get_translator("en")
            .0
            .translate("greeting", &["World"])
            .unwrap(),
        "Hello, World!"
    );
}

#[test]
fn import_missing_path_fails() {
    let mut registry = TranslatorRegistry::new(provider("en"), [provider("en")]);
    let err = codec::import_path(&mut registry, std::path::Path::new("does/not/exist")).unwrap_err();
    assert!(matches!(
        err,
        lingua_i18n::TranslationError::ImportPathFailure { .. }
    ));
}

#[test]
fn import_single_file() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("en.toml");
    std::fs::write(
        &file,
        r#"
        [plain-message]
        locale = "en"
        other = "this is some text to output"

        [ordinal-message]
        locale = "en"
        rule = "ordinal"
        one = "this is your {0}st day"
        two = "this is your {0}nd day"
        few = "this is your {0}rd day"
        other = "this is your {0}th day"
        "#,
    )
    .unwrap();

    let mut registry = TranslatorRegistry::new(provider("en"), [provider("en")]);
    codec::import_path(&mut registry, &file).unwrap();
    registry.verify_all().unwrap();

    let (store, found) = registry.get_translator("en");
    assert!(found);
    assert_eq!(
        store.translate("plain-message", &[]).unwrap(),
        "this is some text to output"
    );
    assert_eq!(
        store.translate_ordinal("ordinal-message", 2.0, 0, "2").unwrap(),
        "this is your 2nd day"
    );
}

#[test]
fn parse_failure_names_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("bad.toml");
    std::fs::write(&file, "= definitely not toml").unwrap();

    let mut registry = TranslatorRegistry::new(provider("en"), [provider("en")]);
    let err = codec::import_path(&mut registry, &file).unwrap_err();
    match err {
        lingua_i18n::TranslationError::ImportReadFailure { path, .. } => {
            assert_eq!(path.as_deref(), Some(file.as_path()));
        }
        other => panic!("unexpected error: {other}"),
    }
}
