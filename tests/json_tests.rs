use assert_json_diff::assert_json_eq;
use bib2html::backends::json::render_json;
use bib2html::publist::PublicationList;
use serde_json::{Value, json};

#[test]
fn json_groups_cleaned_records() {
    let source = "\
@article{a1,
  author = {Doe, Jane and Roe, Richard},
  title = {On \\emph{cod}},
  pages = {1--9},
  keywords = {fish},
  year = 2001
}
@misc{m1,
  title = {Dropped}
}
";
    let list = PublicationList::from_source(source).unwrap();
    let rendered: Value = serde_json::from_str(&render_json(&list).unwrap()).unwrap();
    let empty = |section: &str, heading: &str| {
        json!({"section": section, "heading": heading, "records": []})
    };

    assert_json_eq!(
        rendered,
        json!({
            "buckets": [
                {
                    "section": "Journals",
                    "heading": "Journals",
                    "records": [{
                        "type": "article",
                        "key": "a1",
                        "fields": {
                            "author": "Jane&nbsp;Doe, Richard&nbsp;Roe",
                            "title": "On <i>cod</i>",
                            "pages": "1&ndash;9",
                            "year": "2001",
                            "keywords": "fish"
                        }
                    }]
                },
                empty("Conferences", "Conferences and Workshops"),
                empty("BookChapters", "Book Chapters"),
                empty("TechnicalReports", "Technical Reports"),
                empty("Thesis", "Thesis"),
            ]
        })
    );
}
