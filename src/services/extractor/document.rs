use crate::types::{ChildRow, DocumentError, DocumentRows, ParentRow};
use roxmltree::Node;

/// Parse one document and flatten it into a parent row plus one child row per object.
///
/// When a var name repeats, the first occurrence wins.
pub fn extract_document(text: &str) -> Result<DocumentRows, DocumentError> {
    let doc = roxmltree::Document::parse(text)?;
    let root = doc.root_element();

    let id = var_value(root, "id")?;
    let level = var_value(root, "level")?;

    let objects = root
        .children()
        .find(|n| n.has_tag_name("objects"))
        .ok_or(DocumentError::MissingObjects)?;

    let children = objects
        .children()
        .filter(|n| n.has_tag_name("object"))
        .enumerate()
        .map(|(idx, object)| {
            object
                .attribute("name")
                .map(|name| ChildRow {
                    id: id.clone(),
                    object_name: name.to_string(),
                })
                .ok_or(DocumentError::UnnamedObject(idx))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(DocumentRows {
        parent: ParentRow { id, level },
        children,
    })
}

fn var_value(root: Node<'_, '_>, name: &'static str) -> Result<String, DocumentError> {
    let mut matches = root
        .children()
        .filter(|n| n.has_tag_name("var") && n.attribute("name") == Some(name));

    let first = matches.next().ok_or(DocumentError::MissingVar(name))?;
    if matches.next().is_some() {
        log::debug!("Duplicate var '{name}', using the first occurrence");
    }

    first
        .attribute("value")
        .map(str::to_string)
        .ok_or(DocumentError::MissingVar(name))
}
