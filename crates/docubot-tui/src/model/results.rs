use docubot_core::AnalysisResult;

/// One collapsible block of the results panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultSection {
    Entities,
    Chunks,
    Summary,
}

impl ResultSection {
    /// Render order: entities, then chunks, then summary.
    pub fn all() -> [Self; 3] {
        [Self::Entities, Self::Chunks, Self::Summary]
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Entities => "Named Entities",
            Self::Chunks => "Relevant Chunks",
            Self::Summary => "Summary",
        }
    }

    /// Number key that toggles this section.
    pub fn hotkey(self) -> char {
        match self {
            Self::Entities => '1',
            Self::Chunks => '2',
            Self::Summary => '3',
        }
    }
}

/// Analysis display state on the demo screen.
///
/// Eligibility is data-driven: a section appears only when its data is
/// non-empty. The show flags merely collapse an eligible section's body.
#[derive(Debug)]
pub struct ResultsPanel {
    /// Latest analysis; replaced wholesale on every successful upload.
    pub analysis: Option<AnalysisResult>,
    pub show_entities: bool,
    pub show_chunks: bool,
    pub show_summary: bool,
    pub scroll: u16,
}

impl Default for ResultsPanel {
    fn default() -> Self {
        Self {
            analysis: None,
            // All sections start expanded.
            show_entities: true,
            show_chunks: true,
            show_summary: true,
            scroll: 0,
        }
    }
}

impl ResultsPanel {
    /// Install a fresh analysis. Show flags survive, scroll resets.
    pub fn set_analysis(&mut self, analysis: AnalysisResult) {
        self.analysis = Some(analysis);
        self.scroll = 0;
    }

    /// A section is eligible when its data is non-empty, regardless of
    /// its show flag.
    pub fn eligible(&self, section: ResultSection) -> bool {
        let Some(analysis) = &self.analysis else {
            return false;
        };
        match section {
            ResultSection::Entities => !analysis.entities.is_empty(),
            ResultSection::Chunks => !analysis.relevant_chunks.is_empty(),
            ResultSection::Summary => !analysis.summary.is_empty(),
        }
    }

    pub fn expanded(&self, section: ResultSection) -> bool {
        match section {
            ResultSection::Entities => self.show_entities,
            ResultSection::Chunks => self.show_chunks,
            ResultSection::Summary => self.show_summary,
        }
    }

    pub fn toggle(&mut self, section: ResultSection) {
        match section {
            ResultSection::Entities => self.show_entities = !self.show_entities,
            ResultSection::Chunks => self.show_chunks = !self.show_chunks,
            ResultSection::Summary => self.show_summary = !self.show_summary,
        }
    }

    /// Entity groups in backend order, labels capitalized for display.
    pub fn entity_rows(&self) -> Vec<(String, Vec<String>)> {
        let Some(analysis) = &self.analysis else {
            return Vec::new();
        };
        analysis
            .entities
            .iter()
            .map(|(label, values)| (capitalize(label), values.clone()))
            .collect()
    }
}

/// Capitalize the first character of an entity-type label ("person" → "Person").
pub fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
