use super::*;

#[tokio::test]
async fn healthz_returns_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[test]
fn pkg_dir_joins_site_root_and_pkg_dir() {
    let options = LeptosOptions::builder()
        .output_name("folio")
        .site_root("target/site")
        .site_pkg_dir("pkg")
        .build();
    assert_eq!(pkg_dir(&options), PathBuf::from("target/site/pkg"));
}
