use crate::encoder::function_patterns::FunctionPatterns;
use crate::encoder::placement::DataPlacer;
use crate::error::QrError;
use crate::models::{BitMatrix, ECLevel, MaskPattern, ModuleGrid, Version};

/// Builds complete module grids for one set of final codewords.
///
/// The version-dependent function patterns are stamped once in [`MatrixBuilder::new`];
/// every [`MatrixBuilder::build`] clones that template and adds format info,
/// version info and masked data.
#[derive(Debug, Clone)]
pub struct MatrixBuilder<'a> {
    version: Version,
    ec_level: ECLevel,
    codewords: &'a [u8],
    template: ModuleGrid,
}

impl<'a> MatrixBuilder<'a> {
    /// Stamp the function-pattern template for `version`
    pub fn new(version: Version, ec_level: ECLevel, codewords: &'a [u8]) -> Self {
        Self {
            version,
            ec_level,
            codewords,
            template: FunctionPatterns::template(version),
        }
    }

    /// Symbol version
    pub fn version(&self) -> Version {
        self.version
    }

    /// Error correction level written into the format info
    pub fn ec_level(&self) -> ECLevel {
        self.ec_level
    }

    /// Fully populated grid for `mask`.
    ///
    /// With `test` set, format and version information are written light; the
    /// mask evaluator scores those grids and the final symbol is rebuilt without it.
    pub fn build(&self, mask: MaskPattern, test: bool) -> ModuleGrid {
        let mut grid = self.template.clone();
        FunctionPatterns::place_format_info(&mut grid, self.ec_level, mask, test);
        FunctionPatterns::place_version_info(&mut grid, self.version, test);
        DataPlacer::place(&mut grid, self.codewords, mask);
        grid
    }

    /// [`MatrixBuilder::build`] resolved to a boolean matrix
    pub fn build_resolved(&self, mask: MaskPattern, test: bool) -> Result<BitMatrix, QrError> {
        self.build(mask, test).resolve()
    }
}
