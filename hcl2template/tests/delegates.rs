mod common;

use common::Doc;
use hcl2template::{BuildDecoders, OnlyExcept, ReferenceSyntax, StandardDecoders};
use hclsyntax::ExprKind;

#[test]
fn source_block_with_local_name() {
    let doc = Doc::new();
    let body = doc.body(vec![doc.attr("name", doc.string("frontend"))], vec![]);
    let block = doc.block("source", &["source.docker.web"], body);

    let (source, diags) = StandardDecoders::default().decode_source(&block);

    assert!(diags.is_empty());
    let source = source.unwrap();
    assert_eq!(source.to_string(), "source.docker.web");
    assert_eq!(source.display_name(), "frontend");
}

#[test]
fn source_block_with_bad_reference_points_at_label() {
    let doc = Doc::new();
    let block = doc.empty_block("source", &["docker.web"]);

    let (source, diags) = StandardDecoders::default().decode_source(&block);
    assert!(source.is_none());
    assert_eq!(diags[0].summary, "Invalid source reference");
    assert_eq!(diags[0].subject.as_ref(), Some(&block.labels[0].range));

    let (source, diags) = StandardDecoders::new(ReferenceSyntax::Lenient).decode_source(&block);
    assert!(diags.is_empty());
    assert_eq!(source.unwrap().to_string(), "source.docker.web");
}

#[test]
fn source_block_rejects_other_arguments() {
    let doc = Doc::new();
    let body = doc.body(vec![doc.attr("image", doc.string("ubuntu"))], vec![]);
    let block = doc.block("source", &["source.docker.web"], body);

    let (source, diags) = StandardDecoders::default().decode_source(&block);

    assert!(source.is_none());
    assert_eq!(diags[0].summary, "Unsupported argument");
}

#[test]
fn provisioner_meta_arguments_and_config() {
    let doc = Doc::new();
    let body = doc.body(
        vec![
            doc.attr("name", doc.string("install")),
            doc.attr("only", doc.strings(&["docker.web"])),
            doc.attr("inline", doc.strings(&["apt-get update"])),
        ],
        vec![],
    );
    let block = doc.block("provisioner", &["shell"], body);

    let (provisioner, diags) = StandardDecoders::default().decode_provisioner(&block);

    assert!(diags.is_empty());
    let provisioner = provisioner.unwrap();
    assert_eq!(provisioner.ptype, "shell");
    assert_eq!(provisioner.name.as_deref(), Some("install"));
    assert_eq!(provisioner.only_except.only, ["docker.web"]);
    assert_eq!(provisioner.config.attributes.len(), 1);
    assert_eq!(provisioner.config.attributes[0].name, "inline");
    assert_eq!(provisioner.hcl2_ref.label_ranges, [block.labels[0].range.clone()]);
}

#[test]
fn only_and_except_conflict() {
    let doc = Doc::new();
    let body = doc.body(
        vec![
            doc.attr("only", doc.strings(&["docker.a"])),
            doc.attr("except", doc.strings(&["docker.b"])),
        ],
        vec![],
    );
    let block = doc.block("provisioner", &["shell"], body);

    let (provisioner, diags) = StandardDecoders::default().decode_provisioner(&block);

    assert!(provisioner.is_none());
    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].summary, "Conflicting arguments");
}

#[test]
fn invalid_provisioner_type() {
    let doc = Doc::new();
    let block = doc.empty_block("provisioner", &["shell local"]);

    let (provisioner, diags) = StandardDecoders::default().decode_provisioner(&block);

    assert!(provisioner.is_none());
    assert_eq!(diags[0].summary, "Invalid provisioner type");
}

#[test]
fn missing_label_is_reported_not_panicked() {
    let doc = Doc::new();
    let decoders = StandardDecoders::default();

    let (provisioner, diags) = decoders.decode_provisioner(&doc.empty_block("provisioner", &[]));
    assert!(provisioner.is_none());
    assert_eq!(diags[0].summary, "Missing type for provisioner");

    let (source, diags) = decoders.decode_source(&doc.empty_block("source", &[]));
    assert!(source.is_none());
    assert!(diags.has_errors());
}

#[test]
fn post_processor_keep_input_artifact() {
    let doc = Doc::new();
    let body = doc.body(
        vec![
            doc.attr("keep_input_artifact", doc.expr(ExprKind::Bool(true))),
            doc.attr("except", doc.strings(&["docker.b"])),
            doc.attr("output", doc.string("manifest.json")),
        ],
        vec![],
    );
    let block = doc.block("post-processor", &["manifest"], body);

    let (post_processor, diags) = StandardDecoders::default().decode_post_processor(&block);

    assert!(diags.is_empty());
    let post_processor = post_processor.unwrap();
    assert_eq!(post_processor.ptype, "manifest");
    assert_eq!(post_processor.keep_input_artifact, Some(true));
    assert!(post_processor.only_except.applies_to("docker.a"));
    assert!(!post_processor.only_except.applies_to("docker.b"));
    assert_eq!(post_processor.config.attributes[0].name, "output");
}

#[test]
fn post_processor_bad_meta_value() {
    let doc = Doc::new();
    let body = doc.body(vec![doc.attr("keep_input_artifact", doc.string("yes"))], vec![]);
    let block = doc.block("post-processor", &["manifest"], body);

    let (post_processor, diags) = StandardDecoders::default().decode_post_processor(&block);

    assert!(post_processor.is_none());
    assert_eq!(diags[0].summary, "Incorrect attribute value type");
}

#[test]
fn only_except_filters() {
    let unfiltered = OnlyExcept::default();
    assert!(unfiltered.applies_to("anything"));

    let only = OnlyExcept {
        only: vec!["docker.a".into()],
        except: vec![],
    };
    assert!(only.applies_to("docker.a"));
    assert!(!only.applies_to("docker.b"));
}
