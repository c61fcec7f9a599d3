/// One line of extra help: a label and what it means.
#[derive(Debug, Clone, Copy)]
pub struct HelpEntry {
    pub label: &'static str,
    pub description: &'static str,
}

pub const fn entry(label: &'static str, description: &'static str) -> HelpEntry {
    HelpEntry { label, description }
}

/// Titled block of help entries.
#[derive(Debug, Clone, Copy)]
pub struct HelpSection<'a> {
    pub title: &'a str,
    pub entries: &'a [HelpEntry],
}

/// Renders help sections as aligned `label  description` columns.
#[derive(Debug, Clone, Copy)]
pub struct HelpRenderer {
    indent: usize,
}

impl Default for HelpRenderer {
    fn default() -> Self {
        Self { indent: 2 }
    }
}

impl HelpRenderer {
    /// Sections without entries are left out.
    pub fn render(&self, sections: &[HelpSection]) -> String {
        let mut out = String::with_capacity(1024);
        for section in sections.iter().filter(|s| !s.entries.is_empty()) {
            if !out.is_empty() {
                out.push('\n');
            }
            out.push_str(section.title);
            out.push_str(":\n");
            let width = section
                .entries
                .iter()
                .map(|e| e.label.len())
                .max()
                .unwrap_or(0);
            for e in section.entries {
                out.push_str(&format!(
                    "{:indent$}{:<width$}  {}\n",
                    "",
                    e.label,
                    e.description,
                    indent = self.indent,
                    width = width,
                ));
            }
        }
        out
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_render_aligns_labels() {
        let entries = [entry("Full", "barrel and muon"), entry("MuonOnly", "muons only")];
        let sections = [
            HelpSection {
                title: "Table maker",
                entries: &entries,
            },
            HelpSection {
                title: "Empty",
                entries: &[],
            },
        ];
        let text = HelpRenderer::default().render(&sections);
        assert_eq!(
            text,
            "Table maker:\n  Full      barrel and muon\n  MuonOnly  muons only\n"
        );
    }

    #[test]
    fn test_sections_separated_by_blank_line() {
        let a = [entry("x", "first")];
        let b = [entry("yy", "second")];
        let sections = [
            HelpSection { title: "A", entries: &a },
            HelpSection { title: "B", entries: &b },
        ];
        let text = HelpRenderer::default().render(&sections);
        assert_eq!(text, "A:\n  x  first\n\nB:\n  yy  second\n");
    }
}
