//! FreeType error-definition list
//!
//! Mirrors `freetype/fterrdef.h`. The list is written once and expanded by
//! callback macros into the definition slice, the terminated record table and
//! the `FtErrorCode` enum. Use `ftinit --verify` to compare it against the
//! header of the FreeType that is actually installed.

/// One upstream entry: symbolic name, numeric code, message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ErrorDef<'a> {
    /// Symbolic name without the `FT_Err_` prefix (e.g. `Cannot_Open_Resource`)
    pub name: &'a str,
    /// Numeric code
    pub code: i32,
    /// Human-readable message
    pub message: &'a str,
}

/// Invoke `$callback! { Variant = "Symbol", code, "message"; ... }` with the
/// full FreeType error list, in upstream order.
macro_rules! ft_error_definitions {
    ($callback:ident) => {
        $callback! {
            // generic errors
            Ok = "Ok", 0x00, "no error";
            CannotOpenResource = "Cannot_Open_Resource", 0x01, "cannot open resource";
            UnknownFileFormat = "Unknown_File_Format", 0x02, "unknown file format";
            InvalidFileFormat = "Invalid_File_Format", 0x03, "broken file";
            InvalidVersion = "Invalid_Version", 0x04, "invalid FreeType version";
            LowerModuleVersion = "Lower_Module_Version", 0x05, "module version is too low";
            InvalidArgument = "Invalid_Argument", 0x06, "invalid argument";
            UnimplementedFeature = "Unimplemented_Feature", 0x07, "unimplemented feature";
            InvalidTable = "Invalid_Table", 0x08, "broken table";
            InvalidOffset = "Invalid_Offset", 0x09, "broken offset within table";
            ArrayTooLarge = "Array_Too_Large", 0x0A, "array allocation size too large";
            MissingModule = "Missing_Module", 0x0B, "missing module";
            MissingProperty = "Missing_Property", 0x0C, "missing property";

            // glyph/character errors
            InvalidGlyphIndex = "Invalid_Glyph_Index", 0x10, "invalid glyph index";
            InvalidCharacterCode = "Invalid_Character_Code", 0x11, "invalid character code";
            InvalidGlyphFormat = "Invalid_Glyph_Format", 0x12, "unsupported glyph image format";
            CannotRenderGlyph = "Cannot_Render_Glyph", 0x13, "cannot render this glyph format";
            InvalidOutline = "Invalid_Outline", 0x14, "invalid outline";
            InvalidComposite = "Invalid_Composite", 0x15, "invalid composite glyph";
            TooManyHints = "Too_Many_Hints", 0x16, "too many hints";
            InvalidPixelSize = "Invalid_Pixel_Size", 0x17, "invalid pixel size";
            InvalidSvgDocument = "Invalid_SVG_Document", 0x18, "invalid SVG document";

            // handle errors
            InvalidHandle = "Invalid_Handle", 0x20, "invalid object handle";
            InvalidLibraryHandle = "Invalid_Library_Handle", 0x21, "invalid library handle";
            InvalidDriverHandle = "Invalid_Driver_Handle", 0x22, "invalid module handle";
            InvalidFaceHandle = "Invalid_Face_Handle", 0x23, "invalid face handle";
            InvalidSizeHandle = "Invalid_Size_Handle", 0x24, "invalid size handle";
            InvalidSlotHandle = "Invalid_Slot_Handle", 0x25, "invalid glyph slot handle";
            InvalidCharMapHandle = "Invalid_CharMap_Handle", 0x26, "invalid charmap handle";
            InvalidCacheHandle = "Invalid_Cache_Handle", 0x27, "invalid cache manager handle";
            InvalidStreamHandle = "Invalid_Stream_Handle", 0x28, "invalid stream handle";

            // driver errors
            TooManyDrivers = "Too_Many_Drivers", 0x30, "too many modules";
            TooManyExtensions = "Too_Many_Extensions", 0x31, "too many extensions";

            // memory errors
            OutOfMemory = "Out_Of_Memory", 0x40, "out of memory";
            UnlistedObject = "Unlisted_Object", 0x41, "unlisted object";

            // stream errors
            CannotOpenStream = "Cannot_Open_Stream", 0x51, "cannot open stream";
            InvalidStreamSeek = "Invalid_Stream_Seek", 0x52, "invalid stream seek";
            InvalidStreamSkip = "Invalid_Stream_Skip", 0x53, "invalid stream skip";
            InvalidStreamRead = "Invalid_Stream_Read", 0x54, "invalid stream read";
            InvalidStreamOperation = "Invalid_Stream_Operation", 0x55, "invalid stream operation";
            InvalidFrameOperation = "Invalid_Frame_Operation", 0x56, "invalid frame operation";
            NestedFrameAccess = "Nested_Frame_Access", 0x57, "nested frame access";
            InvalidFrameRead = "Invalid_Frame_Read", 0x58, "invalid frame read";

            // raster errors
            RasterUninitialized = "Raster_Uninitialized", 0x60, "raster uninitialized";
            RasterCorrupted = "Raster_Corrupted", 0x61, "raster corrupted";
            RasterOverflow = "Raster_Overflow", 0x62, "raster overflow";
            RasterNegativeHeight = "Raster_Negative_Height", 0x63, "negative height while rastering";

            // cache errors
            TooManyCaches = "Too_Many_Caches", 0x70, "too many registered caches";

            // TrueType and SFNT errors
            InvalidOpcode = "Invalid_Opcode", 0x80, "invalid opcode";
            TooFewArguments = "Too_Few_Arguments", 0x81, "too few arguments";
            StackOverflow = "Stack_Overflow", 0x82, "stack overflow";
            CodeOverflow = "Code_Overflow", 0x83, "code overflow";
            BadArgument = "Bad_Argument", 0x84, "bad argument";
            DivideByZero = "Divide_By_Zero", 0x85, "division by zero";
            InvalidReference = "Invalid_Reference", 0x86, "invalid reference";
            DebugOpCode = "Debug_OpCode", 0x87, "found debug opcode";
            EndfInExecStream = "ENDF_In_Exec_Stream", 0x88, "found ENDF opcode in execution stream";
            NestedDefs = "Nested_DEFS", 0x89, "nested DEFS";
            InvalidCodeRange = "Invalid_CodeRange", 0x8A, "invalid code range";
            ExecutionTooLong = "Execution_Too_Long", 0x8B, "execution context too long";
            TooManyFunctionDefs = "Too_Many_Function_Defs", 0x8C, "too many function definitions";
            TooManyInstructionDefs = "Too_Many_Instruction_Defs", 0x8D, "too many instruction definitions";
            TableMissing = "Table_Missing", 0x8E, "SFNT font table missing";
            HorizHeaderMissing = "Horiz_Header_Missing", 0x8F, "horizontal header (hhea) table missing";
            LocationsMissing = "Locations_Missing", 0x90, "locations (loca) table missing";
            NameTableMissing = "Name_Table_Missing", 0x91, "name table missing";
            CMapTableMissing = "CMap_Table_Missing", 0x92, "character map (cmap) table missing";
            HmtxTableMissing = "Hmtx_Table_Missing", 0x93, "horizontal metrics (hmtx) table missing";
            PostTableMissing = "Post_Table_Missing", 0x94, "PostScript (post) table missing";
            InvalidHorizMetrics = "Invalid_Horiz_Metrics", 0x95, "invalid horizontal metrics";
            InvalidCharMapFormat = "Invalid_CharMap_Format", 0x96, "invalid character map (cmap) format";
            InvalidPpem = "Invalid_PPem", 0x97, "invalid ppem value";
            InvalidVertMetrics = "Invalid_Vert_Metrics", 0x98, "invalid vertical metrics";
            CouldNotFindContext = "Could_Not_Find_Context", 0x99, "could not find context";
            InvalidPostTableFormat = "Invalid_Post_Table_Format", 0x9A, "invalid PostScript (post) table format";
            InvalidPostTable = "Invalid_Post_Table", 0x9B, "invalid PostScript (post) table";
            DefInGlyfBytecode = "DEF_In_Glyf_Bytecode", 0x9C, "found FDEF or IDEF opcode in glyf bytecode";
            MissingBitmap = "Missing_Bitmap", 0x9D, "missing bitmap in strike";
            MissingSvgHooks = "Missing_SVG_Hooks", 0x9E, "SVG hooks have not been set";

            // CFF, CID, and Type 1 errors
            SyntaxError = "Syntax_Error", 0xA0, "opcode syntax error";
            StackUnderflow = "Stack_Underflow", 0xA1, "argument stack underflow";
            Ignore = "Ignore", 0xA2, "ignore";
            NoUnicodeGlyphName = "No_Unicode_Glyph_Name", 0xA3, "no Unicode glyph name found";
            GlyphTooBig = "Glyph_Too_Big", 0xA4, "glyph too big for hinting";

            // BDF errors
            MissingStartfontField = "Missing_Startfont_Field", 0xB0, "`STARTFONT' field missing";
            MissingFontField = "Missing_Font_Field", 0xB1, "`FONT' field missing";
            MissingSizeField = "Missing_Size_Field", 0xB2, "`SIZE' field missing";
            MissingFontboundingboxField = "Missing_Fontboundingbox_Field", 0xB3, "`FONTBOUNDINGBOX' field missing";
            MissingCharsField = "Missing_Chars_Field", 0xB4, "`CHARS' field missing";
            MissingStartcharField = "Missing_Startchar_Field", 0xB5, "`STARTCHAR' field missing";
            MissingEncodingField = "Missing_Encoding_Field", 0xB6, "`ENCODING' field missing";
            MissingBbxField = "Missing_Bbx_Field", 0xB7, "`BBX' field missing";
            BbxTooBig = "Bbx_Too_Big", 0xB8, "`BBX' too big";
            CorruptedFontHeader = "Corrupted_Font_Header", 0xB9, "Font header corrupted or missing fields";
            CorruptedFontGlyphs = "Corrupted_Font_Glyphs", 0xBA, "Font glyphs corrupted or missing fields";
        }
    };
}

pub(crate) use ft_error_definitions;

macro_rules! define_error_defs {
    ($($variant:ident = $symbol:literal, $code:literal, $message:literal;)*) => {
        /// Built-in FreeType error definitions, in upstream order
        pub static FT_ERROR_DEFS: &[ErrorDef<'static>] = &[
            $(ErrorDef { name: $symbol, code: $code, message: $message },)*
        ];
    };
}

ft_error_definitions!(define_error_defs);
