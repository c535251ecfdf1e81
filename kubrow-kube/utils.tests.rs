use rstest::rstest;

use super::*;

fn container(name: &str, image: Option<&str>) -> Container {
    Container {
        name: name.to_owned(),
        image: image.map(String::from),
        ..Default::default()
    }
}

fn requirement(key: &str, operator: &str, values: &[&str]) -> LabelSelectorRequirement {
    LabelSelectorRequirement {
        key: key.to_owned(),
        operator: operator.to_owned(),
        values: if values.is_empty() {
            None
        } else {
            Some(values.iter().map(|v| (*v).to_owned()).collect())
        },
    }
}

#[rstest]
#[case("default/web", Some("default"), "web")]
#[case("web", Some(""), "web")]
#[case("node-1", None, "node-1")]
fn object_fqn_test(#[case] expected: &str, #[case] namespace: Option<&str>, #[case] name: &str) {
    assert_eq!(expected, object_fqn(namespace, name));
}

#[rstest]
#[case("0s", 0)]
#[case("59s", 59)]
#[case("1m05s", 65)]
#[case("1h00m", 3_600)]
#[case("2h30m", 9_000)]
#[case("1d00h", 86_400)]
#[case("3d04h", 3 * 86_400 + 4 * 3_600 + 59)]
#[case("0s", -30)]
fn format_age_at_test(#[case] expected: &str, #[case] elapsed: i64) {
    let now = Timestamp::from_second(1_700_000_000).unwrap();
    let time = Timestamp::from_second(1_700_000_000 - elapsed).unwrap();

    assert_eq!(expected, format_age_at(&time, &now));
}

#[test]
fn labels_to_string_test() {
    let labels = BTreeMap::from([
        ("tier".to_owned(), "back".to_owned()),
        ("app".to_owned(), "web".to_owned()),
    ]);

    assert_eq!("app=web tier=back", labels_to_string(Some(&labels)));
    assert_eq!("<none>", labels_to_string(Some(&BTreeMap::new())));
    assert_eq!("<none>", labels_to_string(None));
}

#[test]
fn selector_to_string_test() {
    let selector = LabelSelector {
        match_labels: Some(BTreeMap::from([("app".to_owned(), "web".to_owned())])),
        match_expressions: Some(vec![
            requirement("zone", "NotIn", &["b", "a"]),
            requirement("tier", "In", &["front", "back"]),
            requirement("canary", "DoesNotExist", &[]),
            requirement("release", "Exists", &[]),
        ]),
    };

    assert_eq!(
        "app=web,!canary,release,tier in (back,front),zone notin (a,b)",
        selector_to_string(Some(&selector))
    );
}

#[test]
fn selector_to_string_empty_test() {
    assert_eq!("", selector_to_string(None));
    assert_eq!("", selector_to_string(Some(&LabelSelector::default())));
}

#[test]
fn container_and_image_names_test() {
    let spec = PodSpec {
        init_containers: Some(vec![container("init", Some("busybox:1.36"))]),
        containers: vec![
            container("nginx", Some("nginx:1.27")),
            container("sidecar", None),
            container("proxy", Some("nginx:1.27")),
        ],
        ..Default::default()
    };

    assert_eq!("init,nginx,sidecar,proxy", container_names(&spec));
    assert_eq!("busybox:1.36,nginx:1.27,nginx:1.27", image_names(&spec));
    assert_eq!(
        vec!["busybox:1.36", "nginx:1.27"],
        pod_images(&spec).into_iter().collect::<Vec<_>>()
    );
}

#[test]
fn container_names_no_init_test() {
    let spec = PodSpec {
        containers: vec![container("nginx", Some("nginx:1.27"))],
        ..Default::default()
    };

    assert_eq!("nginx", container_names(&spec));
    assert_eq!("nginx:1.27", image_names(&spec));
}
