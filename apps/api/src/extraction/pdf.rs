use super::ExtractError;

/// Extracts the text of every page in page order, joined by newlines.
pub fn extract_pdf_text(content: &[u8]) -> Result<String, ExtractError> {
    let pages = pdf_extract::extract_text_from_mem_by_pages(content)
        .map_err(|e| ExtractError::Pdf(e.to_string()))?;
    Ok(join_pages(&pages))
}

/// The text engine pads each page with blank lines; trim them before joining.
fn join_pages(pages: &[String]) -> String {
    pages
        .iter()
        .map(|page| page.trim())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Document, Object, Stream};

    /// Builds a minimal PDF with one Helvetica text line per page.
    fn build_pdf(pages: &[&str]) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! {
                "F1" => font_id,
            },
        });

        let mut kids: Vec<Object> = Vec::new();
        for text in pages {
            let content = Content {
                operations: vec![
                    Operation::new("BT", vec![]),
                    Operation::new("Tf", vec!["F1".into(), 24.into()]),
                    Operation::new("Td", vec![72.into(), 700.into()]),
                    Operation::new("Tj", vec![Object::string_literal(*text)]),
                    Operation::new("ET", vec![]),
                ],
            };
            let content_id =
                doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
                "Resources" => resources_id,
                "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
            });
            kids.push(page_id.into());
        }

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut buf = Vec::new();
        doc.save_to(&mut buf).unwrap();
        buf
    }

    #[test]
    fn test_join_pages_trims_padding() {
        let pages = vec![
            "\n\nAlice Smith\n".to_string(),
            "\n5 years Java\n\n".to_string(),
        ];
        assert_eq!(join_pages(&pages), "Alice Smith\n5 years Java");
    }

    #[test]
    fn test_join_pages_keeps_empty_pages() {
        let pages = vec!["One".to_string(), "  ".to_string(), "Three".to_string()];
        assert_eq!(join_pages(&pages), "One\n\nThree");
    }

    #[test]
    fn test_pages_are_extracted_in_order() {
        let pdf = build_pdf(&["Alice Smith", "5 years Java"]);
        let text = extract_pdf_text(&pdf).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2, "expected one line per page, got {text:?}");
        assert!(lines[0].contains("Alice"), "got {text:?}");
        assert!(lines[1].contains("Java"), "got {text:?}");
    }

    #[test]
    fn test_garbage_is_a_pdf_error() {
        let err = extract_pdf_text(b"this is not a pdf").unwrap_err();
        assert!(matches!(err, ExtractError::Pdf(_)));
    }
}
