use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;

const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const ID_PREFIX_LEN: usize = 10;
const OBJECT_NAME_LEN: usize = 50;
pub const MAX_LEVEL: u8 = 100;
pub const MIN_OBJECTS: usize = 1;
pub const MAX_OBJECTS: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectEntry {
    pub name: String,
}

/// A generated document before serialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub id: String,
    pub level: u8,
    pub objects: Vec<ObjectEntry>,
}

impl Document {
    /// Render as pretty-printed XML (two-space indent, no declaration).
    pub fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(128 + self.objects.len() * 80);
        xml.push_str("<root>\n");
        xml.push_str(&format!(
            "  <var name=\"id\" value=\"{}\"/>\n",
            escape_attr(&self.id)
        ));
        xml.push_str(&format!("  <var name=\"level\" value=\"{}\"/>\n", self.level));
        xml.push_str("  <objects>\n");
        for object in &self.objects {
            xml.push_str(&format!(
                "    <object name=\"{}\"/>\n",
                escape_attr(&object.name)
            ));
        }
        xml.push_str("  </objects>\n");
        xml.push_str("</root>\n");
        xml
    }
}

fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Produces documents whose ids are unique for the lifetime of the factory.
pub struct DocumentFactory<R: Rng = StdRng> {
    rng: R,
    issued: HashSet<String>,
    fixed_objects: Option<usize>,
}

impl DocumentFactory<StdRng> {
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Deterministic object names and levels; ids still carry the clock suffix.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> DocumentFactory<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            issued: HashSet::new(),
            fixed_objects: None,
        }
    }

    /// Pin the number of objects per document (clamped to 1..=10).
    pub fn with_fixed_objects(mut self, count: usize) -> Self {
        self.fixed_objects = Some(count.clamp(MIN_OBJECTS, MAX_OBJECTS));
        self
    }

    pub fn issued_count(&self) -> usize {
        self.issued.len()
    }

    pub fn next_document(&mut self) -> Document {
        let id = self.next_unique_id();
        let level = self.rng.gen_range(0..=MAX_LEVEL);
        let count = match self.fixed_objects {
            Some(n) => n,
            None => self.rng.gen_range(MIN_OBJECTS..=MAX_OBJECTS),
        };
        let objects = (0..count)
            .map(|_| ObjectEntry {
                name: random_string(&mut self.rng, OBJECT_NAME_LEN),
            })
            .collect();

        Document { id, level, objects }
    }

    fn next_unique_id(&mut self) -> String {
        loop {
            let now = Utc::now();
            let id = format!(
                "{}{}{:06}",
                random_string(&mut self.rng, ID_PREFIX_LEN),
                now.timestamp(),
                now.timestamp_subsec_micros()
            );
            if self.issued.insert(id.clone()) {
                return id;
            }
            log::debug!("Regenerating colliding document id {id}");
        }
    }
}

fn random_string<R: Rng>(rng: &mut R, len: usize) -> String {
    (0..len)
        .map(|_| CHARSET[rng.gen_range(0..CHARSET.len())] as char)
        .collect()
}
