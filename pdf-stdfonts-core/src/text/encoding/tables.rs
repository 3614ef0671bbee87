//! Code to glyph tables for the simple PDF base encodings.

/// One defined code of a base encoding: glyph name and Unicode value.
pub(crate) type Entry = Option<(&'static str, char)>;

const fn ascii(quote: (&'static str, char), backquote: (&'static str, char)) -> [Entry; 256] {
    let mut t: [Entry; 256] = [None; 256];
    t[0x20] = Some(("space", ' '));
    t[0x21] = Some(("exclam", '!'));
    t[0x22] = Some(("quotedbl", '"'));
    t[0x23] = Some(("numbersign", '#'));
    t[0x24] = Some(("dollar", '$'));
    t[0x25] = Some(("percent", '%'));
    t[0x26] = Some(("ampersand", '&'));
    t[0x27] = Some(quote);
    t[0x28] = Some(("parenleft", '('));
    t[0x29] = Some(("parenright", ')'));
    t[0x2A] = Some(("asterisk", '*'));
    t[0x2B] = Some(("plus", '+'));
    t[0x2C] = Some(("comma", ','));
    t[0x2D] = Some(("hyphen", '-'));
    t[0x2E] = Some(("period", '.'));
    t[0x2F] = Some(("slash", '/'));
    t[0x30] = Some(("zero", '0'));
    t[0x31] = Some(("one", '1'));
    t[0x32] = Some(("two", '2'));
    t[0x33] = Some(("three", '3'));
    t[0x34] = Some(("four", '4'));
    t[0x35] = Some(("five", '5'));
    t[0x36] = Some(("six", '6'));
    t[0x37] = Some(("seven", '7'));
    t[0x38] = Some(("eight", '8'));
    t[0x39] = Some(("nine", '9'));
    t[0x3A] = Some(("colon", ':'));
    t[0x3B] = Some(("semicolon", ';'));
    t[0x3C] = Some(("less", '<'));
    t[0x3D] = Some(("equal", '='));
    t[0x3E] = Some(("greater", '>'));
    t[0x3F] = Some(("question", '?'));
    t[0x40] = Some(("at", '@'));
    t[0x41] = Some(("A", 'A'));
    t[0x42] = Some(("B", 'B'));
    t[0x43] = Some(("C", 'C'));
    t[0x44] = Some(("D", 'D'));
    t[0x45] = Some(("E", 'E'));
    t[0x46] = Some(("F", 'F'));
    t[0x47] = Some(("G", 'G'));
    t[0x48] = Some(("H", 'H'));
    t[0x49] = Some(("I", 'I'));
    t[0x4A] = Some(("J", 'J'));
    t[0x4B] = Some(("K", 'K'));
    t[0x4C] = Some(("L", 'L'));
    t[0x4D] = Some(("M", 'M'));
    t[0x4E] = Some(("N", 'N'));
    t[0x4F] = Some(("O", 'O'));
    t[0x50] = Some(("P", 'P'));
    t[0x51] = Some(("Q", 'Q'));
    t[0x52] = Some(("R", 'R'));
    t[0x53] = Some(("S", 'S'));
    t[0x54] = Some(("T", 'T'));
    t[0x55] = Some(("U", 'U'));
    t[0x56] = Some(("V", 'V'));
    t[0x57] = Some(("W", 'W'));
    t[0x58] = Some(("X", 'X'));
    t[0x59] = Some(("Y", 'Y'));
    t[0x5A] = Some(("Z", 'Z'));
    t[0x5B] = Some(("bracketleft", '['));
    t[0x5C] = Some(("backslash", '\\'));
    t[0x5D] = Some(("bracketright", ']'));
    t[0x5E] = Some(("asciicircum", '^'));
    t[0x5F] = Some(("underscore", '_'));
    t[0x60] = Some(backquote);
    t[0x61] = Some(("a", 'a'));
    t[0x62] = Some(("b", 'b'));
    t[0x63] = Some(("c", 'c'));
    t[0x64] = Some(("d", 'd'));
    t[0x65] = Some(("e", 'e'));
    t[0x66] = Some(("f", 'f'));
    t[0x67] = Some(("g", 'g'));
    t[0x68] = Some(("h", 'h'));
    t[0x69] = Some(("i", 'i'));
    t[0x6A] = Some(("j", 'j'));
    t[0x6B] = Some(("k", 'k'));
    t[0x6C] = Some(("l", 'l'));
    t[0x6D] = Some(("m", 'm'));
    t[0x6E] = Some(("n", 'n'));
    t[0x6F] = Some(("o", 'o'));
    t[0x70] = Some(("p", 'p'));
    t[0x71] = Some(("q", 'q'));
    t[0x72] = Some(("r", 'r'));
    t[0x73] = Some(("s", 's'));
    t[0x74] = Some(("t", 't'));
    t[0x75] = Some(("u", 'u'));
    t[0x76] = Some(("v", 'v'));
    t[0x77] = Some(("w", 'w'));
    t[0x78] = Some(("x", 'x'));
    t[0x79] = Some(("y", 'y'));
    t[0x7A] = Some(("z", 'z'));
    t[0x7B] = Some(("braceleft", '{'));
    t[0x7C] = Some(("bar", '|'));
    t[0x7D] = Some(("braceright", '}'));
    t[0x7E] = Some(("asciitilde", '~'));
    t
}

/// Adobe StandardEncoding, the built-in encoding of the Latin standard fonts.
pub(crate) static STANDARD: [Entry; 256] = {
    let mut t = ascii(("quoteright", '\u{2019}'), ("quoteleft", '\u{2018}'));
    t[0xA1] = Some(("exclamdown", '\u{00A1}'));
    t[0xA2] = Some(("cent", '\u{00A2}'));
    t[0xA3] = Some(("sterling", '\u{00A3}'));
    t[0xA4] = Some(("fraction", '\u{2044}'));
    t[0xA5] = Some(("yen", '\u{00A5}'));
    t[0xA6] = Some(("florin", '\u{0192}'));
    t[0xA7] = Some(("section", '\u{00A7}'));
    t[0xA8] = Some(("currency", '\u{00A4}'));
    t[0xA9] = Some(("quotesingle", '\''));
    t[0xAA] = Some(("quotedblleft", '\u{201C}'));
    t[0xAB] = Some(("guillemotleft", '\u{00AB}'));
    t[0xAC] = Some(("guilsinglleft", '\u{2039}'));
    t[0xAD] = Some(("guilsinglright", '\u{203A}'));
    t[0xAE] = Some(("fi", '\u{FB01}'));
    t[0xAF] = Some(("fl", '\u{FB02}'));
    t[0xB1] = Some(("endash", '\u{2013}'));
    t[0xB2] = Some(("dagger", '\u{2020}'));
    t[0xB3] = Some(("daggerdbl", '\u{2021}'));
    t[0xB4] = Some(("periodcentered", '\u{00B7}'));
    t[0xB6] = Some(("paragraph", '\u{00B6}'));
    t[0xB7] = Some(("bullet", '\u{2022}'));
    t[0xB8] = Some(("quotesinglbase", '\u{201A}'));
    t[0xB9] = Some(("quotedblbase", '\u{201E}'));
    t[0xBA] = Some(("quotedblright", '\u{201D}'));
    t[0xBB] = Some(("guillemotright", '\u{00BB}'));
    t[0xBC] = Some(("ellipsis", '\u{2026}'));
    t[0xBD] = Some(("perthousand", '\u{2030}'));
    t[0xBF] = Some(("questiondown", '\u{00BF}'));
    t[0xC1] = Some(("grave", '`'));
    t[0xC2] = Some(("acute", '\u{00B4}'));
    t[0xC3] = Some(("circumflex", '\u{02C6}'));
    t[0xC4] = Some(("tilde", '\u{02DC}'));
    t[0xC5] = Some(("macron", '\u{00AF}'));
    t[0xC6] = Some(("breve", '\u{02D8}'));
    t[0xC7] = Some(("dotaccent", '\u{02D9}'));
    t[0xC8] = Some(("dieresis", '\u{00A8}'));
    t[0xCA] = Some(("ring", '\u{02DA}'));
    t[0xCB] = Some(("cedilla", '\u{00B8}'));
    t[0xCD] = Some(("hungarumlaut", '\u{02DD}'));
    t[0xCE] = Some(("ogonek", '\u{02DB}'));
    t[0xCF] = Some(("caron", '\u{02C7}'));
    t[0xD0] = Some(("emdash", '\u{2014}'));
    t[0xE1] = Some(("AE", '\u{00C6}'));
    t[0xE3] = Some(("ordfeminine", '\u{00AA}'));
    t[0xE8] = Some(("Lslash", '\u{0141}'));
    t[0xE9] = Some(("Oslash", '\u{00D8}'));
    t[0xEA] = Some(("OE", '\u{0152}'));
    t[0xEB] = Some(("ordmasculine", '\u{00BA}'));
    t[0xF1] = Some(("ae", '\u{00E6}'));
    t[0xF5] = Some(("dotlessi", '\u{0131}'));
    t[0xF8] = Some(("lslash", '\u{0142}'));
    t[0xF9] = Some(("oslash", '\u{00F8}'));
    t[0xFA] = Some(("oe", '\u{0153}'));
    t[0xFB] = Some(("germandbls", '\u{00DF}'));
    t
};

/// WinAnsiEncoding (Windows code page 1252).
pub(crate) static WIN_ANSI: [Entry; 256] = {
    let mut t = ascii(("quotesingle", '\''), ("grave", '`'));
    t[0x80] = Some(("Euro", '\u{20AC}'));
    t[0x82] = Some(("quotesinglbase", '\u{201A}'));
    t[0x83] = Some(("florin", '\u{0192}'));
    t[0x84] = Some(("quotedblbase", '\u{201E}'));
    t[0x85] = Some(("ellipsis", '\u{2026}'));
    t[0x86] = Some(("dagger", '\u{2020}'));
    t[0x87] = Some(("daggerdbl", '\u{2021}'));
    t[0x88] = Some(("circumflex", '\u{02C6}'));
    t[0x89] = Some(("perthousand", '\u{2030}'));
    t[0x8A] = Some(("Scaron", '\u{0160}'));
    t[0x8B] = Some(("guilsinglleft", '\u{2039}'));
    t[0x8C] = Some(("OE", '\u{0152}'));
    t[0x8E] = Some(("Zcaron", '\u{017D}'));
    t[0x91] = Some(("quoteleft", '\u{2018}'));
    t[0x92] = Some(("quoteright", '\u{2019}'));
    t[0x93] = Some(("quotedblleft", '\u{201C}'));
    t[0x94] = Some(("quotedblright", '\u{201D}'));
    t[0x95] = Some(("bullet", '\u{2022}'));
    t[0x96] = Some(("endash", '\u{2013}'));
    t[0x97] = Some(("emdash", '\u{2014}'));
    t[0x98] = Some(("tilde", '\u{02DC}'));
    t[0x99] = Some(("trademark", '\u{2122}'));
    t[0x9A] = Some(("scaron", '\u{0161}'));
    t[0x9B] = Some(("guilsinglright", '\u{203A}'));
    t[0x9C] = Some(("oe", '\u{0153}'));
    t[0x9E] = Some(("zcaron", '\u{017E}'));
    t[0x9F] = Some(("Ydieresis", '\u{0178}'));
    // No-break space and soft hyphen reuse the space and hyphen glyphs.
    t[0xA0] = Some(("space", '\u{00A0}'));
    t[0xA1] = Some(("exclamdown", '\u{00A1}'));
    t[0xA2] = Some(("cent", '\u{00A2}'));
    t[0xA3] = Some(("sterling", '\u{00A3}'));
    t[0xA4] = Some(("currency", '\u{00A4}'));
    t[0xA5] = Some(("yen", '\u{00A5}'));
    t[0xA6] = Some(("brokenbar", '\u{00A6}'));
    t[0xA7] = Some(("section", '\u{00A7}'));
    t[0xA8] = Some(("dieresis", '\u{00A8}'));
    t[0xA9] = Some(("copyright", '\u{00A9}'));
    t[0xAA] = Some(("ordfeminine", '\u{00AA}'));
    t[0xAB] = Some(("guillemotleft", '\u{00AB}'));
    t[0xAC] = Some(("logicalnot", '\u{00AC}'));
    t[0xAD] = Some(("hyphen", '\u{00AD}'));
    t[0xAE] = Some(("registered", '\u{00AE}'));
    t[0xAF] = Some(("macron", '\u{00AF}'));
    t[0xB0] = Some(("degree", '\u{00B0}'));
    t[0xB1] = Some(("plusminus", '\u{00B1}'));
    t[0xB2] = Some(("twosuperior", '\u{00B2}'));
    t[0xB3] = Some(("threesuperior", '\u{00B3}'));
    t[0xB4] = Some(("acute", '\u{00B4}'));
    t[0xB5] = Some(("mu", '\u{00B5}'));
    t[0xB6] = Some(("paragraph", '\u{00B6}'));
    t[0xB7] = Some(("periodcentered", '\u{00B7}'));
    t[0xB8] = Some(("cedilla", '\u{00B8}'));
    t[0xB9] = Some(("onesuperior", '\u{00B9}'));
    t[0xBA] = Some(("ordmasculine", '\u{00BA}'));
    t[0xBB] = Some(("guillemotright", '\u{00BB}'));
    t[0xBC] = Some(("onequarter", '\u{00BC}'));
    t[0xBD] = Some(("onehalf", '\u{00BD}'));
    t[0xBE] = Some(("threequarters", '\u{00BE}'));
    t[0xBF] = Some(("questiondown", '\u{00BF}'));
    t[0xC0] = Some(("Agrave", '\u{00C0}'));
    t[0xC1] = Some(("Aacute", '\u{00C1}'));
    t[0xC2] = Some(("Acircumflex", '\u{00C2}'));
    t[0xC3] = Some(("Atilde", '\u{00C3}'));
    t[0xC4] = Some(("Adieresis", '\u{00C4}'));
    t[0xC5] = Some(("Aring", '\u{00C5}'));
    t[0xC6] = Some(("AE", '\u{00C6}'));
    t[0xC7] = Some(("Ccedilla", '\u{00C7}'));
    t[0xC8] = Some(("Egrave", '\u{00C8}'));
    t[0xC9] = Some(("Eacute", '\u{00C9}'));
    t[0xCA] = Some(("Ecircumflex", '\u{00CA}'));
    t[0xCB] = Some(("Edieresis", '\u{00CB}'));
    t[0xCC] = Some(("Igrave", '\u{00CC}'));
    t[0xCD] = Some(("Iacute", '\u{00CD}'));
    t[0xCE] = Some(("Icircumflex", '\u{00CE}'));
    t[0xCF] = Some(("Idieresis", '\u{00CF}'));
    t[0xD0] = Some(("Eth", '\u{00D0}'));
    t[0xD1] = Some(("Ntilde", '\u{00D1}'));
    t[0xD2] = Some(("Ograve", '\u{00D2}'));
    t[0xD3] = Some(("Oacute", '\u{00D3}'));
    t[0xD4] = Some(("Ocircumflex", '\u{00D4}'));
    t[0xD5] = Some(("Otilde", '\u{00D5}'));
    t[0xD6] = Some(("Odieresis", '\u{00D6}'));
    t[0xD7] = Some(("multiply", '\u{00D7}'));
    t[0xD8] = Some(("Oslash", '\u{00D8}'));
    t[0xD9] = Some(("Ugrave", '\u{00D9}'));
    t[0xDA] = Some(("Uacute", '\u{00DA}'));
    t[0xDB] = Some(("Ucircumflex", '\u{00DB}'));
    t[0xDC] = Some(("Udieresis", '\u{00DC}'));
    t[0xDD] = Some(("Yacute", '\u{00DD}'));
    t[0xDE] = Some(("Thorn", '\u{00DE}'));
    t[0xDF] = Some(("germandbls", '\u{00DF}'));
    t[0xE0] = Some(("agrave", '\u{00E0}'));
    t[0xE1] = Some(("aacute", '\u{00E1}'));
    t[0xE2] = Some(("acircumflex", '\u{00E2}'));
    t[0xE3] = Some(("atilde", '\u{00E3}'));
    t[0xE4] = Some(("adieresis", '\u{00E4}'));
    t[0xE5] = Some(("aring", '\u{00E5}'));
    t[0xE6] = Some(("ae", '\u{00E6}'));
    t[0xE7] = Some(("ccedilla", '\u{00E7}'));
    t[0xE8] = Some(("egrave", '\u{00E8}'));
    t[0xE9] = Some(("eacute", '\u{00E9}'));
    t[0xEA] = Some(("ecircumflex", '\u{00EA}'));
    t[0xEB] = Some(("edieresis", '\u{00EB}'));
    t[0xEC] = Some(("igrave", '\u{00EC}'));
    t[0xED] = Some(("iacute", '\u{00ED}'));
    t[0xEE] = Some(("icircumflex", '\u{00EE}'));
    t[0xEF] = Some(("idieresis", '\u{00EF}'));
    t[0xF0] = Some(("eth", '\u{00F0}'));
    t[0xF1] = Some(("ntilde", '\u{00F1}'));
    t[0xF2] = Some(("ograve", '\u{00F2}'));
    t[0xF3] = Some(("oacute", '\u{00F3}'));
    t[0xF4] = Some(("ocircumflex", '\u{00F4}'));
    t[0xF5] = Some(("otilde", '\u{00F5}'));
    t[0xF6] = Some(("odieresis", '\u{00F6}'));
    t[0xF7] = Some(("divide", '\u{00F7}'));
    t[0xF8] = Some(("oslash", '\u{00F8}'));
    t[0xF9] = Some(("ugrave", '\u{00F9}'));
    t[0xFA] = Some(("uacute", '\u{00FA}'));
    t[0xFB] = Some(("ucircumflex", '\u{00FB}'));
    t[0xFC] = Some(("udieresis", '\u{00FC}'));
    t[0xFD] = Some(("yacute", '\u{00FD}'));
    t[0xFE] = Some(("thorn", '\u{00FE}'));
    t[0xFF] = Some(("ydieresis", '\u{00FF}'));
    t
};

/// MacRomanEncoding as defined for PDF (no Apple logo, math symbols or Euro).
pub(crate) static MAC_ROMAN: [Entry; 256] = {
    let mut t = ascii(("quotesingle", '\''), ("grave", '`'));
    t[0x80] = Some(("Adieresis", '\u{00C4}'));
    t[0x81] = Some(("Aring", '\u{00C5}'));
    t[0x82] = Some(("Ccedilla", '\u{00C7}'));
    t[0x83] = Some(("Eacute", '\u{00C9}'));
    t[0x84] = Some(("Ntilde", '\u{00D1}'));
    t[0x85] = Some(("Odieresis", '\u{00D6}'));
    t[0x86] = Some(("Udieresis", '\u{00DC}'));
    t[0x87] = Some(("aacute", '\u{00E1}'));
    t[0x88] = Some(("agrave", '\u{00E0}'));
    t[0x89] = Some(("acircumflex", '\u{00E2}'));
    t[0x8A] = Some(("adieresis", '\u{00E4}'));
    t[0x8B] = Some(("atilde", '\u{00E3}'));
    t[0x8C] = Some(("aring", '\u{00E5}'));
    t[0x8D] = Some(("ccedilla", '\u{00E7}'));
    t[0x8E] = Some(("eacute", '\u{00E9}'));
    t[0x8F] = Some(("egrave", '\u{00E8}'));
    t[0x90] = Some(("ecircumflex", '\u{00EA}'));
    t[0x91] = Some(("edieresis", '\u{00EB}'));
    t[0x92] = Some(("iacute", '\u{00ED}'));
    t[0x93] = Some(("igrave", '\u{00EC}'));
    t[0x94] = Some(("icircumflex", '\u{00EE}'));
    t[0x95] = Some(("idieresis", '\u{00EF}'));
    t[0x96] = Some(("ntilde", '\u{00F1}'));
    t[0x97] = Some(("oacute", '\u{00F3}'));
    t[0x98] = Some(("ograve", '\u{00F2}'));
    t[0x99] = Some(("ocircumflex", '\u{00F4}'));
    t[0x9A] = Some(("odieresis", '\u{00F6}'));
    t[0x9B] = Some(("otilde", '\u{00F5}'));
    t[0x9C] = Some(("uacute", '\u{00FA}'));
    t[0x9D] = Some(("ugrave", '\u{00F9}'));
    t[0x9E] = Some(("ucircumflex", '\u{00FB}'));
    t[0x9F] = Some(("udieresis", '\u{00FC}'));
    t[0xA0] = Some(("dagger", '\u{2020}'));
    t[0xA1] = Some(("degree", '\u{00B0}'));
    t[0xA2] = Some(("cent", '\u{00A2}'));
    t[0xA3] = Some(("sterling", '\u{00A3}'));
    t[0xA4] = Some(("section", '\u{00A7}'));
    t[0xA5] = Some(("bullet", '\u{2022}'));
    t[0xA6] = Some(("paragraph", '\u{00B6}'));
    t[0xA7] = Some(("germandbls", '\u{00DF}'));
    t[0xA8] = Some(("registered", '\u{00AE}'));
    t[0xA9] = Some(("copyright", '\u{00A9}'));
    t[0xAA] = Some(("trademark", '\u{2122}'));
    t[0xAB] = Some(("acute", '\u{00B4}'));
    t[0xAC] = Some(("dieresis", '\u{00A8}'));
    t[0xAE] = Some(("AE", '\u{00C6}'));
    t[0xAF] = Some(("Oslash", '\u{00D8}'));
    t[0xB1] = Some(("plusminus", '\u{00B1}'));
    t[0xB4] = Some(("yen", '\u{00A5}'));
    t[0xB5] = Some(("mu", '\u{00B5}'));
    t[0xBB] = Some(("ordfeminine", '\u{00AA}'));
    t[0xBC] = Some(("ordmasculine", '\u{00BA}'));
    t[0xBE] = Some(("ae", '\u{00E6}'));
    t[0xBF] = Some(("oslash", '\u{00F8}'));
    t[0xC0] = Some(("questiondown", '\u{00BF}'));
    t[0xC1] = Some(("exclamdown", '\u{00A1}'));
    t[0xC2] = Some(("logicalnot", '\u{00AC}'));
    t[0xC4] = Some(("florin", '\u{0192}'));
    t[0xC7] = Some(("guillemotleft", '\u{00AB}'));
    t[0xC8] = Some(("guillemotright", '\u{00BB}'));
    t[0xC9] = Some(("ellipsis", '\u{2026}'));
    t[0xCA] = Some(("space", '\u{00A0}'));
    t[0xCB] = Some(("Agrave", '\u{00C0}'));
    t[0xCC] = Some(("Atilde", '\u{00C3}'));
    t[0xCD] = Some(("Otilde", '\u{00D5}'));
    t[0xCE] = Some(("OE", '\u{0152}'));
    t[0xCF] = Some(("oe", '\u{0153}'));
    t[0xD0] = Some(("endash", '\u{2013}'));
    t[0xD1] = Some(("emdash", '\u{2014}'));
    t[0xD2] = Some(("quotedblleft", '\u{201C}'));
    t[0xD3] = Some(("quotedblright", '\u{201D}'));
    t[0xD4] = Some(("quoteleft", '\u{2018}'));
    t[0xD5] = Some(("quoteright", '\u{2019}'));
    t[0xD6] = Some(("divide", '\u{00F7}'));
    t[0xD8] = Some(("ydieresis", '\u{00FF}'));
    t[0xD9] = Some(("Ydieresis", '\u{0178}'));
    t[0xDA] = Some(("fraction", '\u{2044}'));
    t[0xDB] = Some(("currency", '\u{00A4}'));
    t[0xDC] = Some(("guilsinglleft", '\u{2039}'));
    t[0xDD] = Some(("guilsinglright", '\u{203A}'));
    t[0xDE] = Some(("fi", '\u{FB01}'));
    t[0xDF] = Some(("fl", '\u{FB02}'));
    t[0xE0] = Some(("daggerdbl", '\u{2021}'));
    t[0xE1] = Some(("periodcentered", '\u{00B7}'));
    t[0xE2] = Some(("quotesinglbase", '\u{201A}'));
    t[0xE3] = Some(("quotedblbase", '\u{201E}'));
    t[0xE4] = Some(("perthousand", '\u{2030}'));
    t[0xE5] = Some(("Acircumflex", '\u{00C2}'));
    t[0xE6] = Some(("Ecircumflex", '\u{00CA}'));
    t[0xE7] = Some(("Aacute", '\u{00C1}'));
    t[0xE8] = Some(("Edieresis", '\u{00CB}'));
    t[0xE9] = Some(("Egrave", '\u{00C8}'));
    t[0xEA] = Some(("Iacute", '\u{00CD}'));
    t[0xEB] = Some(("Icircumflex", '\u{00CE}'));
    t[0xEC] = Some(("Idieresis", '\u{00CF}'));
    t[0xED] = Some(("Igrave", '\u{00CC}'));
    t[0xEE] = Some(("Oacute", '\u{00D3}'));
    t[0xEF] = Some(("Ocircumflex", '\u{00D4}'));
    t[0xF1] = Some(("Ograve", '\u{00D2}'));
    t[0xF2] = Some(("Uacute", '\u{00DA}'));
    t[0xF3] = Some(("Ucircumflex", '\u{00DB}'));
    t[0xF4] = Some(("Ugrave", '\u{00D9}'));
    t[0xF5] = Some(("dotlessi", '\u{0131}'));
    t[0xF6] = Some(("circumflex", '\u{02C6}'));
    t[0xF7] = Some(("tilde", '\u{02DC}'));
    t[0xF8] = Some(("macron", '\u{00AF}'));
    t[0xF9] = Some(("breve", '\u{02D8}'));
    t[0xFA] = Some(("dotaccent", '\u{02D9}'));
    t[0xFB] = Some(("ring", '\u{02DA}'));
    t[0xFC] = Some(("cedilla", '\u{00B8}'));
    t[0xFD] = Some(("hungarumlaut", '\u{02DD}'));
    t[0xFE] = Some(("ogonek", '\u{02DB}'));
    t[0xFF] = Some(("caron", '\u{02C7}'));
    t
};

/// Adobe Glyph List names of the Latin Extended-A and math glyphs that no
/// base encoding places at a code.
pub(crate) static EXTENDED_GLYPHS: &[(&str, char)] = &[
    ("Abreve", '\u{0102}'),
    ("Amacron", '\u{0100}'),
    ("Aogonek", '\u{0104}'),
    ("Cacute", '\u{0106}'),
    ("Ccaron", '\u{010C}'),
    ("Dcaron", '\u{010E}'),
    ("Dcroat", '\u{0110}'),
    ("Delta", '\u{2206}'),
    ("Ecaron", '\u{011A}'),
    ("Edotaccent", '\u{0116}'),
    ("Emacron", '\u{0112}'),
    ("Eogonek", '\u{0118}'),
    ("Gbreve", '\u{011E}'),
    ("Gcommaaccent", '\u{0122}'),
    ("Idotaccent", '\u{0130}'),
    ("Imacron", '\u{012A}'),
    ("Iogonek", '\u{012E}'),
    ("Kcommaaccent", '\u{0136}'),
    ("Lacute", '\u{0139}'),
    ("Lcaron", '\u{013D}'),
    ("Lcommaaccent", '\u{013B}'),
    ("Nacute", '\u{0143}'),
    ("Ncaron", '\u{0147}'),
    ("Ncommaaccent", '\u{0145}'),
    ("Ohungarumlaut", '\u{0150}'),
    ("Omacron", '\u{014C}'),
    ("Racute", '\u{0154}'),
    ("Rcaron", '\u{0158}'),
    ("Rcommaaccent", '\u{0156}'),
    ("Sacute", '\u{015A}'),
    ("Scedilla", '\u{015E}'),
    ("Scommaaccent", '\u{0218}'),
    ("Tcaron", '\u{0164}'),
    ("Tcommaaccent", '\u{0162}'),
    ("Uhungarumlaut", '\u{0170}'),
    ("Umacron", '\u{016A}'),
    ("Uogonek", '\u{0172}'),
    ("Uring", '\u{016E}'),
    ("Zacute", '\u{0179}'),
    ("Zdotaccent", '\u{017B}'),
    ("abreve", '\u{0103}'),
    ("amacron", '\u{0101}'),
    ("aogonek", '\u{0105}'),
    ("cacute", '\u{0107}'),
    ("ccaron", '\u{010D}'),
    ("commaaccent", '\u{0326}'),
    ("dcaron", '\u{010F}'),
    ("dcroat", '\u{0111}'),
    ("ecaron", '\u{011B}'),
    ("edotaccent", '\u{0117}'),
    ("emacron", '\u{0113}'),
    ("eogonek", '\u{0119}'),
    ("gbreve", '\u{011F}'),
    ("gcommaaccent", '\u{0123}'),
    ("greaterequal", '\u{2265}'),
    ("imacron", '\u{012B}'),
    ("iogonek", '\u{012F}'),
    ("kcommaaccent", '\u{0137}'),
    ("lacute", '\u{013A}'),
    ("lcaron", '\u{013E}'),
    ("lcommaaccent", '\u{013C}'),
    ("lessequal", '\u{2264}'),
    ("lozenge", '\u{25CA}'),
    ("minus", '\u{2212}'),
    ("nacute", '\u{0144}'),
    ("ncaron", '\u{0148}'),
    ("ncommaaccent", '\u{0146}'),
    ("notequal", '\u{2260}'),
    ("ohungarumlaut", '\u{0151}'),
    ("omacron", '\u{014D}'),
    ("partialdiff", '\u{2202}'),
    ("racute", '\u{0155}'),
    ("radical", '\u{221A}'),
    ("rcaron", '\u{0159}'),
    ("rcommaaccent", '\u{0157}'),
    ("sacute", '\u{015B}'),
    ("scedilla", '\u{015F}'),
    ("scommaaccent", '\u{0219}'),
    ("summation", '\u{2211}'),
    ("tcaron", '\u{0165}'),
    ("tcommaaccent", '\u{0163}'),
    ("uhungarumlaut", '\u{0171}'),
    ("umacron", '\u{016B}'),
    ("uogonek", '\u{0173}'),
    ("uring", '\u{016F}'),
    ("zacute", '\u{017A}'),
    ("zdotaccent", '\u{017C}'),
];
