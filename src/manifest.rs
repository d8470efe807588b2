use crate::error::{Error, Result};
use roxmltree::{Document, Node};
use std::fs;
use std::path::{Path, PathBuf};

pub const MANIFEST_FILENAME: &str = "xfdumanifest.xml";

/// Rewrites a path before it is read, e.g. to point reads at a mirror of the
/// archive. The manifest keeps its original href for output purposes.
pub type ReadHrefModifier = dyn Fn(&Path) -> PathBuf;

#[derive(Debug)]
pub struct Manifest {
    pub href: PathBuf,
    content: String,
}

impl Manifest {
    pub fn read(granule_href: &Path) -> Result<Self> {
        Self::read_with(granule_href, None)
    }

    pub fn read_with(
        granule_href: &Path,
        read_href_modifier: Option<&ReadHrefModifier>,
    ) -> Result<Self> {
        let href = granule_href.join(MANIFEST_FILENAME);
        let read_href = match read_href_modifier {
            Some(modifier) => modifier(&href),
            None => href.clone(),
        };
        let content = fs::read_to_string(&read_href).map_err(|source| Error::Io {
            path: read_href,
            source,
        })?;

        let doc = Document::parse(&content)?;
        if find_element(&doc, "dataObjectSection").is_none() {
            return Err(Error::ManifestStructure(href));
        }

        Ok(Manifest { href, content })
    }

    /// Parses the owned XML text into a DOM view. The document borrows from
    /// the manifest, so callers hold it only for the duration of a lookup
    /// pass.
    pub fn document(self: &Self) -> Result<Document<'_>> {
        Ok(Document::parse(&self.content)?)
    }

    pub fn data_objects(self: &Self) -> Result<Vec<DataObject>> {
        let mut data_objects: Vec<DataObject> = vec![];
        let doc = self.document()?;

        let data_object_section = find_element(&doc, "dataObjectSection")
            .ok_or_else(|| Error::ManifestStructure(self.href.clone()))?;

        for data_object in data_object_section.children() {
            if let Some(d) = DataObject::new(data_object) {
                data_objects.push(d);
            }
        }
        Ok(data_objects)
    }
}

/// SAFE manifests prefix tags with per-mission namespaces (`sentinel3:rows`,
/// `sentinel-safe:startTime`). Lookup compares local names only so the same
/// helpers serve every product family.
pub fn find_element<'a, 'input>(doc: &'a Document<'input>, tag: &str) -> Option<Node<'a, 'input>> {
    doc.descendants().filter(|n| n.has_tag_name(tag)).next()
}

pub fn find_elements<'a, 'input>(doc: &'a Document<'input>, tag: &str) -> Vec<Node<'a, 'input>> {
    doc.descendants().filter(|n| n.has_tag_name(tag)).collect()
}

pub fn find_text(doc: &Document, tag: &str) -> Option<String> {
    let text = find_element(doc, tag)?.text()?;
    Some(text.trim().to_string())
}

pub fn find_attr(doc: &Document, tag: &str, attribute: &str) -> Option<String> {
    let value = find_element(doc, tag)?.attribute(attribute)?;
    Some(value.to_string())
}

pub fn require_text(doc: &Document, tag: &str) -> Result<String> {
    find_text(doc, tag).ok_or_else(|| Error::ManifestValue(tag.to_string()))
}

pub fn require_attr(doc: &Document, tag: &str, attribute: &str) -> Result<String> {
    find_attr(doc, tag, attribute).ok_or_else(|| Error::ManifestValue(format!("{tag}@{attribute}")))
}

#[derive(Debug, PartialEq, Clone)]
pub struct DataObject {
    pub id: String,
    pub relative_href: String,
    pub filesize: Option<u64>,
    pub media_type: Option<String>,
    pub text_info: Option<String>,
    pub checksum_algorithm: Option<String>,
    pub checksum: Option<String>,
}

impl DataObject {
    fn new(data_object: Node) -> Option<Self> {
        let id = Self::extract_id(data_object)?;
        let relative_href = Self::extract_relative_href(data_object)?;
        let filesize = Self::extract_filesize(data_object);
        let media_type = Self::extract_media_type(data_object);
        let text_info = Self::extract_text_info(data_object);
        let checksum_algorithm = Self::extract_checksum_algorithm(data_object);
        let checksum = Self::extract_checksum(data_object);

        Some(Self {
            id,
            relative_href,
            filesize,
            media_type,
            text_info,
            checksum_algorithm,
            checksum,
        })
    }

    fn extract_id(data_object: Node) -> Option<String> {
        Some(data_object.attribute("ID")?.to_string())
    }

    fn extract_relative_href(data_object: Node) -> Option<String> {
        let file_location = data_object
            .descendants()
            .filter(|n| n.has_tag_name("fileLocation"))
            .next()?;
        let href = file_location.attribute("href")?;
        // Hrefs come in both "./measurement.nc" and "measurement.nc" forms;
        // normalized here so joined paths never contain "/./".
        let href = href.strip_prefix("./").unwrap_or(href);
        Some(href.to_string())
    }

    fn extract_filesize(data_object: Node) -> Option<u64> {
        let byte_stream = data_object
            .children()
            .filter(|n| n.has_tag_name("byteStream"))
            .next()?;
        let filesize: u64 = byte_stream.attribute("size")?.parse().ok()?;
        Some(filesize)
    }

    fn extract_media_type(data_object: Node) -> Option<String> {
        let byte_stream = data_object
            .children()
            .filter(|n| n.has_tag_name("byteStream"))
            .next()?;
        Some(byte_stream.attribute("mimeType")?.to_string())
    }

    fn extract_text_info(data_object: Node) -> Option<String> {
        let file_location = data_object
            .descendants()
            .filter(|n| n.has_tag_name("fileLocation"))
            .next()?;
        Some(file_location.attribute("textInfo")?.to_string())
    }

    fn extract_checksum_algorithm(data_object: Node) -> Option<String> {
        let checksum = data_object
            .descendants()
            .filter(|n| n.has_tag_name("checksum"))
            .next()?;
        Some(checksum.attribute("checksumName")?.to_string())
    }

    fn extract_checksum(data_object: Node) -> Option<String> {
        let checksum = data_object
            .descendants()
            .filter(|n| n.has_tag_name("checksum"))
            .next()?;
        Some(checksum.text()?.to_string())
    }
}
