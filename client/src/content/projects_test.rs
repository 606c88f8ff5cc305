use super::*;

#[test]
fn projects_have_unique_titles() {
    let items = projects();
    assert!(!items.is_empty());
    let mut titles = items.iter().map(|p| p.title.as_str()).collect::<Vec<_>>();
    titles.sort_unstable();
    titles.dedup();
    assert_eq!(titles.len(), items.len());
}

#[test]
fn every_project_has_tags_and_description() {
    for project in projects() {
        assert!(!project.tags.is_empty(), "{} has no tags", project.title);
        assert!(!project.description.trim().is_empty(), "{} has no description", project.title);
    }
}

#[test]
fn empty_seed_link_becomes_none() {
    let novel = projects()
        .into_iter()
        .find(|p| p.title == "Web Novel Application")
        .expect("novel project present");
    assert_eq!(novel.link, None);
    assert!(novel.github_link.is_some());
}

#[test]
fn has_tag_is_exact_match() {
    let project = Project {
        title: "x".to_owned(),
        image_src: None,
        description: "d".to_owned(),
        tags: vec!["React".to_owned()],
        link: None,
        github_link: None,
        stats: None,
    };
    assert!(project.has_tag("React"));
    assert!(!project.has_tag("react"));
    assert!(!project.has_tag("React JS"));
}
