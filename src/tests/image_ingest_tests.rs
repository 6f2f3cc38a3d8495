#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use tempfile::tempdir;

    use crate::implementations::admin_form::PropertyForm;
    use crate::implementations::image_ingest::{image_mime, ingest_file, ingest_files};
    use crate::tests::mock_api::setup;

    fn write(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, bytes).unwrap();
        path
    }

    #[test]
    fn recognizes_image_extensions() {
        setup();
        assert_eq!(image_mime(Path::new("a.PNG")).unwrap().essence_str(), "image/png");
        assert_eq!(image_mime(Path::new("a.jpeg")).unwrap().essence_str(), "image/jpeg");
        assert_eq!(image_mime(Path::new("a.webp")).unwrap().essence_str(), "image/webp");
        assert!(image_mime(Path::new("notes.txt")).is_none());
        assert!(image_mime(Path::new("no_extension")).is_none());
    }

    #[tokio::test]
    async fn encodes_file_as_data_uri() {
        setup();
        let dir = tempdir().unwrap();
        let path = write(dir.path(), "dot.png", b"hello");

        let image = ingest_file(&path).await.unwrap();
        assert_eq!(image.name, "dot.png");
        assert_eq!(image.data_uri, "data:image/png;base64,aGVsbG8=");
    }

    #[tokio::test]
    async fn concurrent_ingestion_skips_non_images_and_isolates_failures() {
        setup();
        let dir = tempdir().unwrap();
        let paths = vec![
            write(dir.path(), "one.jpg", b"one"),
            write(dir.path(), "readme.txt", b"text"),
            dir.path().join("missing.png"),
            write(dir.path(), "two.gif", b"two"),
        ];

        let results = ingest_files(&paths).await;
        assert_eq!(results.len(), 3);

        let mut names: Vec<String> = results.iter().filter_map(|r| r.as_ref().ok()).map(|i| i.name.clone()).collect();
        names.sort();
        assert_eq!(names, vec!["one.jpg", "two.gif"]);
        assert_eq!(results.iter().filter(|r| r.is_err()).count(), 1);
    }

    #[tokio::test]
    async fn form_collects_uploaded_images() {
        setup();
        let dir = tempdir().unwrap();
        let gallery = vec![write(dir.path(), "a.png", b"a"), write(dir.path(), "b.png", b"b")];
        let main = write(dir.path(), "main.jpg", b"main");

        let mut form = PropertyForm::new();
        let failures = form.ingest_gallery_files(&gallery).await;
        assert!(failures.is_empty());
        assert_eq!(form.uploaded_images.len(), 2);

        let ids: Vec<u64> = form.uploaded_images.iter().map(|i| i.id).collect();
        assert_ne!(ids[0], ids[1]);

        form.ingest_main_image(&main).await.unwrap();
        assert!(form.image.starts_with("data:image/jpeg;base64,"));

        assert!(form.ingest_main_image(&dir.path().join("notes.txt")).await.is_err());
        assert!(form.image.starts_with("data:image/jpeg;base64,"));
    }
}
