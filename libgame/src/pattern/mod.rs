use itertools::Itertools;
use strum::{EnumCount, EnumIter};

use crate::{error::CatalogueError, grid::CellState};

pub mod catalogue;
pub mod matcher;

/// A life-form family. The declaration order is the order families are reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumCount)]
pub enum Family {
    Block,
    Beehive,
    Loaf,
    Boat,
    Tub,
    Blinker,
    Toad,
    Beacon,
    Glider,
    LightweightSpaceship,
}

impl Family {
    pub fn label(&self) -> &'static str {
        match self {
            Family::Block => "block",
            Family::Beehive => "beehives",
            Family::Loaf => "loafs",
            Family::Boat => "boats",
            Family::Tub => "tubs",
            Family::Blinker => "blinkers",
            Family::Toad => "toads",
            Family::Beacon => "beacons",
            Family::Glider => "gliders",
            Family::LightweightSpaceship => "LWS ships",
        }
    }

    pub(crate) fn index(&self) -> usize {
        *self as usize
    }
}

/// One row of the declarative template table. `bitmap` is the flattened row-major shape,
/// `O` for an alive cell and `.` for a dead one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateEntry {
    pub family: Family,
    pub variant: &'static str,

    /// Lower ranks are tested first at every anchor.
    pub rank: usize,

    pub height: usize,
    pub width: usize,
    pub bitmap: &'static str,
}

/// A validated, fixed-shape variant of a life-form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pub family: Family,
    pub variant: &'static str,
    pub rank: usize,
    pub height: usize,
    pub width: usize,
    pub cells: Vec<CellState>,
}

impl TryFrom<&TemplateEntry> for Template {
    type Error = CatalogueError;

    fn try_from(entry: &TemplateEntry) -> Result<Self, Self::Error> {
        let TemplateEntry {
            family,
            variant,
            rank,
            height,
            width,
            bitmap,
        } = *entry;

        if height == 0 || width == 0 {
            return Err(CatalogueError::EmptyShape {
                variant,
                height,
                width,
            });
        }

        let cells = bitmap
            .chars()
            .map(|character| match character {
                'O' => Ok(CellState::Alive),
                '.' => Ok(CellState::Dead),
                character => Err(CatalogueError::InvalidCell { variant, character }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        if cells.len() != height * width {
            return Err(CatalogueError::ShapeMismatch {
                variant,
                height,
                width,
                expected: height * width,
                actual: cells.len(),
            });
        }

        Ok(Self {
            family,
            variant,
            rank,
            height,
            width,
            cells,
        })
    }
}

/// The rank-ordered set of templates tested at every anchor. Read-only once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalogue {
    templates: Vec<Template>,
}

impl Catalogue {
    pub fn standard() -> Result<Self, CatalogueError> {
        Self::from_entries(catalogue::STANDARD_TEMPLATES)
    }

    pub fn from_entries(entries: &[TemplateEntry]) -> Result<Self, CatalogueError> {
        let templates = entries
            .iter()
            .map(Template::try_from)
            .collect::<Result<Vec<_>, _>>()?
            .into_iter()
            .sorted_by_key(|template| template.rank)
            .collect_vec();

        if let Some((first, second)) = templates
            .iter()
            .tuple_windows()
            .find(|(first, second)| first.rank == second.rank)
        {
            return Err(CatalogueError::DuplicateRank {
                first: first.variant,
                second: second.variant,
                rank: first.rank,
            });
        }

        log::debug!("Loaded {} pattern templates", templates.len());

        Ok(Self { templates })
    }

    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    pub fn variants_of(&self, family: Family) -> impl Iterator<Item = &Template> {
        self.templates
            .iter()
            .filter(move |template| template.family == family)
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    fn entry(variant: &'static str, rank: usize, height: usize, width: usize, bitmap: &'static str) -> TemplateEntry {
        TemplateEntry {
            family: Family::Block,
            variant,
            rank,
            height,
            width,
            bitmap,
        }
    }

    #[test]
    fn standard_catalogue_is_valid() {
        let catalogue = Catalogue::standard().unwrap();
        assert_eq!(catalogue.templates().len(), 19);

        for template in catalogue.templates() {
            assert_eq!(template.cells.len(), template.height * template.width);
        }
    }

    #[test]
    fn standard_catalogue_is_in_priority_order() {
        let catalogue = Catalogue::standard().unwrap();
        let variants = catalogue
            .templates()
            .iter()
            .map(|template| template.variant)
            .collect_vec();

        assert_eq!(
            variants,
            vec![
                "block", "beehive", "loaf", "boat", "tub", "blinker-h", "blinker-v", "toad-v1",
                "toad-v2", "beacon-v1", "beacon-v2", "glider-v1", "glider-v2", "glider-v3",
                "glider-v4", "lwss-v1", "lwss-v2", "lwss-v3", "lwss-v4",
            ]
        );
    }

    #[test]
    fn every_family_has_variants() {
        let catalogue = Catalogue::standard().unwrap();

        let variant_counts = Family::iter()
            .map(|family| catalogue.variants_of(family).count())
            .collect_vec();

        assert_eq!(variant_counts, vec![1, 1, 1, 1, 1, 2, 2, 2, 4, 4]);
    }

    #[test]
    fn every_template_has_a_dead_border() {
        for template in Catalogue::standard().unwrap().templates() {
            let border_alive = template.cells.iter().enumerate().any(|(index, cell)| {
                let (row, col) = (index / template.width, index % template.width);
                let on_border = row == 0 || col == 0 || row == template.height - 1 || col == template.width - 1;
                on_border && cell.is_alive()
            });

            assert!(!border_alive, "{} has alive border cells", template.variant);
        }
    }

    #[test]
    fn rejects_bitmap_of_wrong_length() {
        let result = Catalogue::from_entries(&[entry("short", 0, 2, 2, "OOO")]);

        assert_eq!(
            result,
            Err(CatalogueError::ShapeMismatch {
                variant: "short",
                height: 2,
                width: 2,
                expected: 4,
                actual: 3,
            })
        );
    }

    #[test]
    fn rejects_unknown_bitmap_characters() {
        let result = Catalogue::from_entries(&[entry("odd", 0, 1, 2, "O#")]);
        assert_eq!(
            result,
            Err(CatalogueError::InvalidCell {
                variant: "odd",
                character: '#',
            })
        );
    }

    #[test]
    fn rejects_empty_shape() {
        let result = Catalogue::from_entries(&[entry("empty", 0, 0, 3, "")]);
        assert!(matches!(result, Err(CatalogueError::EmptyShape { .. })));
    }

    #[test]
    fn rejects_duplicate_ranks() {
        let result = Catalogue::from_entries(&[entry("a", 1, 1, 1, "O"), entry("b", 1, 1, 1, ".")]);
        assert!(matches!(result, Err(CatalogueError::DuplicateRank { rank: 1, .. })));
    }

    #[test]
    fn templates_are_sorted_by_rank() {
        let catalogue = Catalogue::from_entries(&[entry("late", 5, 1, 1, "O"), entry("early", 2, 1, 1, ".")]).unwrap();
        assert_eq!(catalogue.templates()[0].variant, "early");
    }
}
