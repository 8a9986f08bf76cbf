//! Block readers and writers for molfile headers and connection tables.
//!
//! Line tokenizing and formatting are not done here: a [`CtabTokenizer`]
//! turns CTab lines into records and a [`CtabFormatter`] turns a molecule
//! back into CTab lines. These handlers sequence the blocks, sniff the
//! version, run reconstruction and prepare what the formatter writes.

use log::debug;

use super::block::{BlockReader, BlockWriter, TextLinesBuffer};
use super::builder::{fill_fragment, FillReport};
use super::count_line::{decode_count_line, encode_count_line, CountLine};
use super::error::{MdlError, Result};
use super::extract::{coord_mode_of, extract, StructuralInfo};
use super::header::{generate_info_line, read_info_line, Header, HeaderInfo};
use super::options::MdlOptions;
use super::records::CtabInfo;
use super::{CoordMode, MdlVersion};
use crate::lookup::{ChemLookup, PeriodicTable};
use crate::mol::Mol;

const END_LINE: &str = "M  END";

/// Turns the CTab lines following a count line into records.
pub trait CtabTokenizer {
    /// Reads the body of one connection table from the cursor on. The count
    /// line has already been consumed and decoded into `count_line`. The
    /// cursor must be left on the line after the body; a closing `M  END`
    /// may be left unread.
    fn read_ctab(&mut self, count_line: &CountLine, buffer: &mut TextLinesBuffer)
        -> Result<CtabInfo>;
}

/// Writes the CTab lines that follow the count line.
pub trait CtabFormatter {
    /// Writes atoms, bonds and groups of `mol` in the order `info` lists
    /// them, with coordinates taken from `info.coord_mode`. The count line
    /// and the closing `M  END` are written by the caller.
    fn write_ctab(
        &mut self,
        mol: &Mol,
        info: &StructuralInfo,
        version: MdlVersion,
        buffer: &mut TextLinesBuffer,
    ) -> Result<()>;
}

/// A connection table read back into a graph.
#[derive(Debug, Clone)]
pub struct FragmentRead {
    pub mol: Mol,
    pub report: FillReport,
    pub version: MdlVersion,
}

/// A molfile: header lines plus its connection table.
#[derive(Debug, Clone, Default)]
pub struct Molfile {
    pub header: Header,
    pub mol: Mol,
}

#[derive(Debug, Clone)]
pub struct MolfileRead {
    pub molfile: Molfile,
    pub report: FillReport,
    pub version: MdlVersion,
}

/// Reads the name, info and comment lines. Lines missing at the end of the
/// input read as blank.
#[derive(Debug, Default)]
pub struct HeaderBlockReader {
    buffer: TextLinesBuffer,
}

impl HeaderBlockReader {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BlockReader for HeaderBlockReader {
    type Output = Header;

    fn text_buffer(&mut self) -> &mut TextLinesBuffer {
        &mut self.buffer
    }

    fn do_read_block(&mut self, buffer: &mut TextLinesBuffer) -> Result<Header> {
        if buffer.eof() {
            return Err(MdlError::EmptyBlock);
        }
        let mut next = || buffer.read_line().unwrap_or_default();
        let name = next();
        let info_line = next();
        let comment = next();
        Ok(Header {
            name: Some(name).filter(|s| !s.trim().is_empty()),
            info: read_info_line(&info_line)?,
            comment: Some(comment).filter(|s| !s.trim().is_empty()),
        })
    }
}

/// Writes the three header lines. The info line dimension code comes from
/// `header.info.coord_mode`.
#[derive(Debug)]
pub struct HeaderBlockWriter {
    buffer: TextLinesBuffer,
    program_name: String,
}

impl HeaderBlockWriter {
    pub fn new(program_name: impl Into<String>) -> Self {
        Self {
            buffer: TextLinesBuffer::new(),
            program_name: program_name.into(),
        }
    }
}

impl Default for HeaderBlockWriter {
    fn default() -> Self {
        Self::new(MdlOptions::default().program_name)
    }
}

impl BlockWriter for HeaderBlockWriter {
    type Input = Header;

    fn text_buffer(&mut self) -> &mut TextLinesBuffer {
        &mut self.buffer
    }

    fn do_write_block(&mut self, header: &Header, buffer: &mut TextLinesBuffer) -> Result<()> {
        let info = HeaderInfo {
            program_name: header
                .info
                .program_name
                .clone()
                .or_else(|| Some(self.program_name.clone())),
            ..header.info.clone()
        };
        buffer.write_line(header.name.clone().unwrap_or_default());
        buffer.write_line(generate_info_line(&info, info.coord_mode));
        buffer.write_line(header.comment.clone().unwrap_or_default());
        Ok(())
    }
}

/// Reads a count line and the connection table after it into a new
/// [`Mol`].
#[derive(Debug)]
pub struct StructureFragmentReader<T, L = PeriodicTable> {
    buffer: TextLinesBuffer,
    tokenizer: T,
    lookup: L,
    coord_mode: CoordMode,
}

impl<T: CtabTokenizer> StructureFragmentReader<T> {
    pub fn new(tokenizer: T) -> Self {
        Self::with_lookup(tokenizer, PeriodicTable)
    }
}

impl<T, L> StructureFragmentReader<T, L>
where
    T: CtabTokenizer,
    L: ChemLookup,
{
    pub fn with_lookup(tokenizer: T, lookup: L) -> Self {
        Self {
            buffer: TextLinesBuffer::new(),
            tokenizer,
            lookup,
            coord_mode: CoordMode::Unknown,
        }
    }

    pub fn coord_mode(&self) -> CoordMode {
        self.coord_mode
    }

    /// Forces the coordinate space of every node read; `Unknown` lets each
    /// table decide.
    pub fn set_coord_mode(&mut self, coord_mode: CoordMode) {
        self.coord_mode = coord_mode;
    }
}

impl<T, L> BlockReader for StructureFragmentReader<T, L>
where
    T: CtabTokenizer,
    L: ChemLookup,
{
    type Output = FragmentRead;

    fn text_buffer(&mut self) -> &mut TextLinesBuffer {
        &mut self.buffer
    }

    fn do_read_block(&mut self, buffer: &mut TextLinesBuffer) -> Result<FragmentRead> {
        if buffer.eof() {
            return Err(MdlError::EmptyBlock);
        }
        let line = buffer.read_line().ok_or(MdlError::MissingCountLine)?;
        let count_line = decode_count_line(&line)?;
        debug!(
            "reading {} ctab, count line declares {} atoms and {} bonds",
            count_line.version.tag(),
            count_line.atom_count,
            count_line.bond_count
        );
        let ctab = self.tokenizer.read_ctab(&count_line, buffer)?;

        let mut mol = Mol::new();
        let report = fill_fragment(&mut mol, &ctab, self.coord_mode, &self.lookup)?;

        if buffer
            .current_line()
            .is_some_and(|l| l.trim().eq_ignore_ascii_case(END_LINE))
        {
            buffer.read_line();
        }
        Ok(FragmentRead {
            mol,
            report,
            version: count_line.version,
        })
    }
}

/// Writes the count line, the formatter's CTab lines and `M  END`.
#[derive(Debug)]
pub struct StructureFragmentWriter<F> {
    buffer: TextLinesBuffer,
    formatter: F,
    version: MdlVersion,
    coord_mode: CoordMode,
}

impl<F: CtabFormatter> StructureFragmentWriter<F> {
    pub fn new(formatter: F, version: MdlVersion) -> Self {
        Self {
            buffer: TextLinesBuffer::new(),
            formatter,
            version,
            coord_mode: CoordMode::Unknown,
        }
    }

    pub fn version(&self) -> MdlVersion {
        self.version
    }

    /// Forces the coordinate space written; `Unknown` uses the majority of
    /// the atoms.
    pub fn set_coord_mode(&mut self, coord_mode: CoordMode) {
        self.coord_mode = coord_mode;
    }

    /// The snapshot this writer hands the formatter for `mol`.
    pub fn structural_info(&self, mol: &Mol) -> StructuralInfo {
        let mut info = extract(mol);
        if self.coord_mode != CoordMode::Unknown {
            info.coord_mode = self.coord_mode;
        }
        info
    }
}

impl<F: CtabFormatter> BlockWriter for StructureFragmentWriter<F> {
    type Input = Mol;

    fn text_buffer(&mut self) -> &mut TextLinesBuffer {
        &mut self.buffer
    }

    fn do_write_block(&mut self, mol: &Mol, buffer: &mut TextLinesBuffer) -> Result<()> {
        let info = self.structural_info(mol);
        buffer.write_line(encode_count_line(&info, self.version));
        self.formatter.write_ctab(mol, &info, self.version, buffer)?;
        buffer.write_line(END_LINE);
        Ok(())
    }
}

/// Reads a whole molfile: header, then connection table.
///
/// The info line's dimension code forces the coordinate space of the table
/// unless the options force one.
#[derive(Debug)]
pub struct MolfileReader<T, L = PeriodicTable> {
    buffer: TextLinesBuffer,
    header: HeaderBlockReader,
    structure: StructureFragmentReader<T, L>,
    options: MdlOptions,
}

impl<T: CtabTokenizer> MolfileReader<T> {
    pub fn new(tokenizer: T, options: MdlOptions) -> Self {
        Self::with_lookup(tokenizer, PeriodicTable, options)
    }
}

impl<T, L> MolfileReader<T, L>
where
    T: CtabTokenizer,
    L: ChemLookup,
{
    pub fn with_lookup(tokenizer: T, lookup: L, options: MdlOptions) -> Self {
        Self {
            buffer: TextLinesBuffer::new(),
            header: HeaderBlockReader::new(),
            structure: StructureFragmentReader::with_lookup(tokenizer, lookup),
            options,
        }
    }
}

impl<T, L> BlockReader for MolfileReader<T, L>
where
    T: CtabTokenizer,
    L: ChemLookup,
{
    type Output = MolfileRead;

    fn text_buffer(&mut self) -> &mut TextLinesBuffer {
        &mut self.buffer
    }

    fn do_read_block(&mut self, buffer: &mut TextLinesBuffer) -> Result<MolfileRead> {
        let header = self.header.do_read_block(buffer)?;
        let coord_mode = match self.options.coord_mode {
            CoordMode::Unknown => header.info.coord_mode,
            forced => forced,
        };
        self.structure.set_coord_mode(coord_mode);
        let fragment = self.structure.do_read_block(buffer)?;
        Ok(MolfileRead {
            molfile: Molfile {
                header,
                mol: fragment.mol,
            },
            report: fragment.report,
            version: fragment.version,
        })
    }
}

/// Writes a whole molfile in the version the options name.
#[derive(Debug)]
pub struct MolfileWriter<F> {
    buffer: TextLinesBuffer,
    header: HeaderBlockWriter,
    structure: StructureFragmentWriter<F>,
    options: MdlOptions,
}

impl<F: CtabFormatter> MolfileWriter<F> {
    pub fn new(formatter: F, options: MdlOptions) -> Self {
        let mut structure = StructureFragmentWriter::new(formatter, options.version);
        structure.set_coord_mode(options.coord_mode);
        Self {
            buffer: TextLinesBuffer::new(),
            header: HeaderBlockWriter::new(options.program_name.clone()),
            structure,
            options,
        }
    }

    pub fn options(&self) -> &MdlOptions {
        &self.options
    }
}

impl<F: CtabFormatter> BlockWriter for MolfileWriter<F> {
    type Input = Molfile;

    fn text_buffer(&mut self) -> &mut TextLinesBuffer {
        &mut self.buffer
    }

    fn do_write_block(&mut self, molfile: &Molfile, buffer: &mut TextLinesBuffer) -> Result<()> {
        let coord_mode = match self.options.coord_mode {
            CoordMode::Unknown => coord_mode_of(&molfile.mol, &molfile.mol.leaf_nodes()),
            forced => forced,
        };
        let mut header = molfile.header.clone();
        header.info.coord_mode = coord_mode;
        self.header.do_write_block(&header, buffer)?;
        self.structure.do_write_block(&molfile.mol, buffer)
    }
}
