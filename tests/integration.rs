use feaexport::{export, load, ExportOptions, ExportStatus, FeaExportError, Font};
use pretty_assertions::assert_eq;

#[test]
fn test_load_json() -> Result<(), FeaExportError> {
    let font = load("tests/data/TestSans.json")?;

    assert_eq!(font.family_name, "Test Sans");
    assert_eq!(font.export_stem(), "TestSans");
    let names: Vec<&str> = font
        .features
        .classes
        .iter()
        .map(|c| c.name.as_str())
        .collect();
    assert_eq!(names, vec!["Uppercase", "Lowercase", "Retired"]);
    assert!(font.features.classes[0].active);
    assert!(!font.features.classes[2].active);
    assert_eq!(font.features.prefixes.len(), 2);
    assert_eq!(font.features.features.len(), 3);
    assert_eq!(font.features.inactive_count(), 3);
    Ok(())
}

#[test]
fn test_export_json_active_only() -> Result<(), FeaExportError> {
    let font = load("tests/data/TestSans.json")?;
    let dir = tempfile::tempdir().unwrap();
    let target = export(&font, Some(dir.path()), ExportOptions::default())?;
    assert_eq!(target, dir.path().join("TestSans.fea"));

    let written = std::fs::read_to_string(&target).unwrap();
    assert_eq!(
        written,
        "# CLASSES\n\
         \n\
         # CLASS: Uppercase\n\
         Uppercase=[A B C];\n\
         \n\
         # CLASS: Lowercase\n\
         Lowercase=[a b c];\n\
         \n\
         \n\
         \n\
         # PREFIXES\n\
         \n\
         # PREFIX: Languagesystems\n\
         languagesystem DFLT dflt;\n\
         languagesystem latn dflt;\n\
         \n\
         \n\
         \n\
         \n\
         # FEATURES\n\
         feature liga {\n\
         sub f i by fi;\n\
         };\n\
         \n\
         feature case {\n\
         # Caf forms\n\
         sub @Uppercase by @Uppercase;\n\
         };\n"
    );
    Ok(())
}

#[test]
fn test_export_json_with_inactive() -> Result<(), FeaExportError> {
    let font = load("tests/data/TestSans.json")?;
    let dir = tempfile::tempdir().unwrap();
    let target = export(
        &font,
        Some(dir.path()),
        ExportOptions::new().include_inactive(true),
    )?;
    let written = std::fs::read_to_string(target).unwrap();

    assert!(written.contains("Lowercase=[a b c];\n\n# # CLASS: Retired\n# Retired=[x.old y.old];\n"));
    assert!(written.contains(
        "# # PREFIX: Experiments\n# lookup test {\n#     sub a by b;\n# } test;\n"
    ));
    assert!(written.contains("# feature ss01 {\n# sub a by a.ss01;\n# sub b by b.ss01;\n# };\n"));
    assert!(written.is_ascii());
    Ok(())
}

#[test]
fn test_no_destination_writes_nothing() {
    let font = Font::new();
    let status = ExportStatus::run(&font, None, ExportOptions::default());
    assert_eq!(
        status,
        ExportStatus {
            success: false,
            message: "No folder chosen.".to_string()
        }
    );
}

#[test]
fn test_unknown_extension() {
    let result = load("tests/data/TestSans.ufo");
    assert!(matches!(result, Err(FeaExportError::UnknownFileType { .. })));
}

#[test]
fn test_saved_font_reloads() -> Result<(), FeaExportError> {
    let font = load("tests/data/TestSans.json")?;
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Copy.json");
    font.save(&path)?;
    let reloaded = load(&path)?;
    assert_eq!(reloaded.features, font.features);
    assert_eq!(reloaded.export_stem(), "Copy");
    Ok(())
}

#[cfg(feature = "glyphs")]
#[test]
fn test_load_glyphs() -> Result<(), FeaExportError> {
    let font = load("tests/data/TestSans.glyphs")?;
    assert_eq!(font.family_name, "Test Sans");

    let classes = &font.features.classes;
    assert_eq!(classes.len(), 2);
    assert_eq!(classes[0].name, "Uppercase");
    assert!(classes[0].active);
    assert_eq!(classes[1].name, "Retired");
    assert!(!classes[1].active);

    assert_eq!(font.features.prefixes[0].name, "Languagesystems");
    let tags: Vec<&str> = font
        .features
        .features
        .iter()
        .map(|f| f.name.as_str())
        .collect();
    assert_eq!(tags, vec!["liga", "ss01"]);
    assert!(!font.features.features[1].active);

    let fea = font.features.to_fea(false);
    assert!(fea.contains("Uppercase=[A B C];"));
    assert!(fea.contains("feature liga {\nsub f i by fi;\n};"));
    assert!(!fea.contains("ss01"));
    Ok(())
}
