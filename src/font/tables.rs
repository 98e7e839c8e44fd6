// Glyph tables. Column fonts hold one byte per column with the top row in
// bit 0. Stacked fonts hold `height / 8` bytes per column, top to bottom, with
// the top row of each byte in bit 7.

pub static FONT_DEFAULT: [u8; 640] = [
    0x00, 0x00, 0x00, 0x00, 0x00, // 0x00
    0x3e, 0x5b, 0x4f, 0x5b, 0x3e, // 0x01
    0x3e, 0x6b, 0x4f, 0x6b, 0x3e, // 0x02
    0x1c, 0x3e, 0x7c, 0x3e, 0x1c, // 0x03
    0x18, 0x3c, 0x7e, 0x3c, 0x18, // 0x04
    0x1c, 0x57, 0x7d, 0x57, 0x1c, // 0x05
    0x1c, 0x5e, 0x7f, 0x5e, 0x1c, // 0x06
    0x00, 0x18, 0x3c, 0x18, 0x00, // 0x07
    0xff, 0xe7, 0xc3, 0xe7, 0xff, // 0x08
    0x00, 0x18, 0x24, 0x18, 0x00, // 0x09
    0xff, 0xe7, 0xdb, 0xe7, 0xff, // 0x0A
    0x30, 0x48, 0x3a, 0x06, 0x0e, // 0x0B
    0x26, 0x29, 0x79, 0x29, 0x26, // 0x0C
    0x40, 0x7f, 0x05, 0x05, 0x07, // 0x0D
    0x40, 0x7f, 0x05, 0x25, 0x3f, // 0x0E
    0x5a, 0x3c, 0xe7, 0x3c, 0x5a, // 0x0F
    0x7f, 0x3e, 0x1c, 0x1c, 0x08, // 0x10
    0x08, 0x1c, 0x1c, 0x3e, 0x7f, // 0x11
    0x14, 0x22, 0x7f, 0x22, 0x14, // 0x12
    0x5f, 0x5f, 0x00, 0x5f, 0x5f, // 0x13
    0x06, 0x09, 0x7f, 0x01, 0x7f, // 0x14
    0x00, 0x66, 0x89, 0x95, 0x6a, // 0x15
    0x60, 0x60, 0x60, 0x60, 0x60, // 0x16
    0x94, 0xa2, 0xff, 0xa2, 0x94, // 0x17
    0x08, 0x04, 0x7e, 0x04, 0x08, // 0x18
    0x10, 0x20, 0x7e, 0x20, 0x10, // 0x19
    0x08, 0x08, 0x2a, 0x1c, 0x08, // 0x1A
    0x08, 0x1c, 0x2a, 0x08, 0x08, // 0x1B
    0x1e, 0x10, 0x10, 0x10, 0x10, // 0x1C
    0x0c, 0x1e, 0x0c, 0x1e, 0x0c, // 0x1D
    0x30, 0x38, 0x3e, 0x38, 0x30, // 0x1E
    0x06, 0x0e, 0x3e, 0x0e, 0x06, // 0x1F
    0x00, 0x00, 0x00, 0x00, 0x00, // ' '
    0x00, 0x00, 0x5f, 0x00, 0x00, // '!'
    0x00, 0x07, 0x00, 0x07, 0x00, // '"'
    0x14, 0x7f, 0x14, 0x7f, 0x14, // '#'
    0x24, 0x2a, 0x7f, 0x2a, 0x12, // '$'
    0x23, 0x13, 0x08, 0x64, 0x62, // '%'
    0x36, 0x49, 0x55, 0x22, 0x50, // '&'
    0x00, 0x05, 0x03, 0x00, 0x00, // '\''
    0x00, 0x1c, 0x22, 0x41, 0x00, // '('
    0x00, 0x41, 0x22, 0x1c, 0x00, // ')'
    0x14, 0x08, 0x3e, 0x08, 0x14, // '*'
    0x08, 0x08, 0x3e, 0x08, 0x08, // '+'
    0x00, 0x50, 0x30, 0x00, 0x00, // ','
    0x08, 0x08, 0x08, 0x08, 0x08, // '-'
    0x00, 0x60, 0x60, 0x00, 0x00, // '.'
    0x20, 0x10, 0x08, 0x04, 0x02, // '/'
    0x3e, 0x51, 0x49, 0x45, 0x3e, // '0'
    0x00, 0x42, 0x7f, 0x40, 0x00, // '1'
    0x42, 0x61, 0x51, 0x49, 0x46, // '2'
    0x21, 0x41, 0x45, 0x4b, 0x31, // '3'
    0x18, 0x14, 0x12, 0x7f, 0x10, // '4'
    0x27, 0x45, 0x45, 0x45, 0x39, // '5'
    0x3c, 0x4a, 0x49, 0x49, 0x30, // '6'
    0x01, 0x71, 0x09, 0x05, 0x03, // '7'
    0x36, 0x49, 0x49, 0x49, 0x36, // '8'
    0x06, 0x49, 0x49, 0x29, 0x1e, // '9'
    0x00, 0x36, 0x36, 0x00, 0x00, // ':'
    0x00, 0x56, 0x36, 0x00, 0x00, // ';'
    0x08, 0x14, 0x22, 0x41, 0x00, // '<'
    0x14, 0x14, 0x14, 0x14, 0x14, // '='
    0x00, 0x41, 0x22, 0x14, 0x08, // '>'
    0x02, 0x01, 0x51, 0x09, 0x06, // '?'
    0x32, 0x49, 0x79, 0x41, 0x3e, // '@'
    0x7e, 0x11, 0x11, 0x11, 0x7e, // 'A'
    0x7f, 0x49, 0x49, 0x49, 0x36, // 'B'
    0x3e, 0x41, 0x41, 0x41, 0x22, // 'C'
    0x7f, 0x41, 0x41, 0x22, 0x1c, // 'D'
    0x7f, 0x49, 0x49, 0x49, 0x41, // 'E'
    0x7f, 0x09, 0x09, 0x09, 0x01, // 'F'
    0x3e, 0x41, 0x49, 0x49, 0x7a, // 'G'
    0x7f, 0x08, 0x08, 0x08, 0x7f, // 'H'
    0x00, 0x41, 0x7f, 0x41, 0x00, // 'I'
    0x20, 0x40, 0x41, 0x3f, 0x01, // 'J'
    0x7f, 0x08, 0x14, 0x22, 0x41, // 'K'
    0x7f, 0x40, 0x40, 0x40, 0x40, // 'L'
    0x7f, 0x02, 0x0c, 0x02, 0x7f, // 'M'
    0x7f, 0x04, 0x08, 0x10, 0x7f, // 'N'
    0x3e, 0x41, 0x41, 0x41, 0x3e, // 'O'
    0x7f, 0x09, 0x09, 0x09, 0x06, // 'P'
    0x3e, 0x41, 0x51, 0x21, 0x5e, // 'Q'
    0x7f, 0x09, 0x19, 0x29, 0x46, // 'R'
    0x46, 0x49, 0x49, 0x49, 0x31, // 'S'
    0x01, 0x01, 0x7f, 0x01, 0x01, // 'T'
    0x3f, 0x40, 0x40, 0x40, 0x3f, // 'U'
    0x1f, 0x20, 0x40, 0x20, 0x1f, // 'V'
    0x3f, 0x40, 0x38, 0x40, 0x3f, // 'W'
    0x63, 0x14, 0x08, 0x14, 0x63, // 'X'
    0x07, 0x08, 0x70, 0x08, 0x07, // 'Y'
    0x61, 0x51, 0x49, 0x45, 0x43, // 'Z'
    0x00, 0x7f, 0x41, 0x41, 0x00, // '['
    0x02, 0x04, 0x08, 0x10, 0x20, // '\\'
    0x00, 0x41, 0x41, 0x7f, 0x00, // ']'
    0x04, 0x02, 0x01, 0x02, 0x04, // '^'
    0x40, 0x40, 0x40, 0x40, 0x40, // '_'
    0x00, 0x01, 0x02, 0x04, 0x00, // '`'
    0x20, 0x54, 0x54, 0x54, 0x78, // 'a'
    0x7f, 0x48, 0x44, 0x44, 0x38, // 'b'
    0x38, 0x44, 0x44, 0x44, 0x20, // 'c'
    0x38, 0x44, 0x44, 0x48, 0x7f, // 'd'
    0x38, 0x54, 0x54, 0x54, 0x18, // 'e'
    0x08, 0x7e, 0x09, 0x01, 0x02, // 'f'
    0x0c, 0x52, 0x52, 0x52, 0x3e, // 'g'
    0x7f, 0x08, 0x04, 0x04, 0x78, // 'h'
    0x00, 0x44, 0x7d, 0x40, 0x00, // 'i'
    0x20, 0x40, 0x44, 0x3d, 0x00, // 'j'
    0x7f, 0x10, 0x28, 0x44, 0x00, // 'k'
    0x00, 0x41, 0x7f, 0x40, 0x00, // 'l'
    0x7c, 0x04, 0x18, 0x04, 0x78, // 'm'
    0x7c, 0x08, 0x04, 0x04, 0x78, // 'n'
    0x38, 0x44, 0x44, 0x44, 0x38, // 'o'
    0x7c, 0x14, 0x14, 0x14, 0x08, // 'p'
    0x08, 0x14, 0x14, 0x18, 0x7c, // 'q'
    0x7c, 0x08, 0x04, 0x04, 0x08, // 'r'
    0x48, 0x54, 0x54, 0x54, 0x20, // 's'
    0x04, 0x3f, 0x44, 0x40, 0x20, // 't'
    0x3c, 0x40, 0x40, 0x20, 0x7c, // 'u'
    0x1c, 0x20, 0x40, 0x20, 0x1c, // 'v'
    0x3c, 0x40, 0x30, 0x40, 0x3c, // 'w'
    0x44, 0x28, 0x10, 0x28, 0x44, // 'x'
    0x0c, 0x50, 0x50, 0x50, 0x3c, // 'y'
    0x44, 0x64, 0x54, 0x4c, 0x44, // 'z'
    0x00, 0x08, 0x36, 0x41, 0x00, // '{'
    0x00, 0x00, 0x7f, 0x00, 0x00, // '|'
    0x00, 0x41, 0x36, 0x08, 0x00, // '}'
    0x10, 0x08, 0x08, 0x10, 0x08, // '~'
    0x78, 0x46, 0x41, 0x46, 0x78, // DEL
];

pub static FONT_THICK: [u8; 448] = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // ' '
    0x00, 0x00, 0x5f, 0x5f, 0x00, 0x00, 0x00, // '!'
    0x00, 0x07, 0x07, 0x07, 0x07, 0x00, 0x00, // '"'
    0x14, 0x7f, 0x7f, 0x7f, 0x7f, 0x14, 0x00, // '#'
    0x24, 0x2e, 0x7f, 0x7f, 0x3a, 0x12, 0x00, // '$'
    0x23, 0x33, 0x1b, 0x6c, 0x66, 0x62, 0x00, // '%'
    0x36, 0x7f, 0x5d, 0x77, 0x72, 0x50, 0x00, // '&'
    0x00, 0x05, 0x07, 0x03, 0x00, 0x00, 0x00, // '\''
    0x00, 0x1c, 0x3e, 0x63, 0x41, 0x00, 0x00, // '('
    0x00, 0x41, 0x63, 0x3e, 0x1c, 0x00, 0x00, // ')'
    0x14, 0x1c, 0x3e, 0x3e, 0x1c, 0x14, 0x00, // '*'
    0x08, 0x08, 0x3e, 0x3e, 0x08, 0x08, 0x00, // '+'
    0x00, 0x50, 0x70, 0x30, 0x00, 0x00, 0x00, // ','
    0x08, 0x08, 0x08, 0x08, 0x08, 0x08, 0x00, // '-'
    0x00, 0x60, 0x60, 0x60, 0x00, 0x00, 0x00, // '.'
    0x20, 0x30, 0x18, 0x0c, 0x06, 0x02, 0x00, // '/'
    0x3e, 0x7f, 0x59, 0x4d, 0x7f, 0x3e, 0x00, // '0'
    0x00, 0x42, 0x7f, 0x7f, 0x40, 0x00, 0x00, // '1'
    0x42, 0x63, 0x71, 0x59, 0x4f, 0x46, 0x00, // '2'
    0x21, 0x61, 0x45, 0x4f, 0x7b, 0x31, 0x00, // '3'
    0x18, 0x1c, 0x16, 0x7f, 0x7f, 0x10, 0x00, // '4'
    0x27, 0x67, 0x45, 0x45, 0x7d, 0x39, 0x00, // '5'
    0x3c, 0x7e, 0x4b, 0x49, 0x79, 0x30, 0x00, // '6'
    0x01, 0x71, 0x79, 0x0d, 0x07, 0x03, 0x00, // '7'
    0x36, 0x7f, 0x49, 0x49, 0x7f, 0x36, 0x00, // '8'
    0x06, 0x4f, 0x49, 0x69, 0x3f, 0x1e, 0x00, // '9'
    0x00, 0x36, 0x36, 0x36, 0x00, 0x00, 0x00, // ':'
    0x00, 0x56, 0x76, 0x36, 0x00, 0x00, 0x00, // ';'
    0x08, 0x1c, 0x36, 0x63, 0x41, 0x00, 0x00, // '<'
    0x14, 0x14, 0x14, 0x14, 0x14, 0x14, 0x00, // '='
    0x00, 0x41, 0x63, 0x36, 0x1c, 0x08, 0x00, // '>'
    0x02, 0x03, 0x51, 0x59, 0x0f, 0x06, 0x00, // '?'
    0x32, 0x7b, 0x79, 0x79, 0x7f, 0x3e, 0x00, // '@'
    0x7e, 0x7f, 0x11, 0x11, 0x7f, 0x7e, 0x00, // 'A'
    0x7f, 0x7f, 0x49, 0x49, 0x7f, 0x36, 0x00, // 'B'
    0x3e, 0x7f, 0x41, 0x41, 0x63, 0x22, 0x00, // 'C'
    0x7f, 0x7f, 0x41, 0x63, 0x3e, 0x1c, 0x00, // 'D'
    0x7f, 0x7f, 0x49, 0x49, 0x49, 0x41, 0x00, // 'E'
    0x7f, 0x7f, 0x09, 0x09, 0x09, 0x01, 0x00, // 'F'
    0x3e, 0x7f, 0x49, 0x49, 0x7b, 0x7a, 0x00, // 'G'
    0x7f, 0x7f, 0x08, 0x08, 0x7f, 0x7f, 0x00, // 'H'
    0x00, 0x41, 0x7f, 0x7f, 0x41, 0x00, 0x00, // 'I'
    0x20, 0x60, 0x41, 0x7f, 0x3f, 0x01, 0x00, // 'J'
    0x7f, 0x7f, 0x1c, 0x36, 0x63, 0x41, 0x00, // 'K'
    0x7f, 0x7f, 0x40, 0x40, 0x40, 0x40, 0x00, // 'L'
    0x7f, 0x7f, 0x0e, 0x0e, 0x7f, 0x7f, 0x00, // 'M'
    0x7f, 0x7f, 0x0c, 0x18, 0x7f, 0x7f, 0x00, // 'N'
    0x3e, 0x7f, 0x41, 0x41, 0x7f, 0x3e, 0x00, // 'O'
    0x7f, 0x7f, 0x09, 0x09, 0x0f, 0x06, 0x00, // 'P'
    0x3e, 0x7f, 0x51, 0x71, 0x7f, 0x5e, 0x00, // 'Q'
    0x7f, 0x7f, 0x19, 0x39, 0x6f, 0x46, 0x00, // 'R'
    0x46, 0x4f, 0x49, 0x49, 0x79, 0x31, 0x00, // 'S'
    0x01, 0x01, 0x7f, 0x7f, 0x01, 0x01, 0x00, // 'T'
    0x3f, 0x7f, 0x40, 0x40, 0x7f, 0x3f, 0x00, // 'U'
    0x1f, 0x3f, 0x60, 0x60, 0x3f, 0x1f, 0x00, // 'V'
    0x3f, 0x7f, 0x78, 0x78, 0x7f, 0x3f, 0x00, // 'W'
    0x63, 0x77, 0x1c, 0x1c, 0x77, 0x63, 0x00, // 'X'
    0x07, 0x0f, 0x78, 0x78, 0x0f, 0x07, 0x00, // 'Y'
    0x61, 0x71, 0x59, 0x4d, 0x47, 0x43, 0x00, // 'Z'
    0x00, 0x7f, 0x7f, 0x41, 0x41, 0x00, 0x00, // '['
    0x02, 0x06, 0x0c, 0x18, 0x30, 0x20, 0x00, // '\\'
    0x00, 0x41, 0x41, 0x7f, 0x7f, 0x00, 0x00, // ']'
    0x04, 0x06, 0x03, 0x03, 0x06, 0x04, 0x00, // '^'
    0x40, 0x40, 0x40, 0x40, 0x40, 0x40, 0x00, // '_'
];

pub static FONT_WIDE: [u8; 512] = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // ' '
    0x00, 0x00, 0x00, 0x5f, 0x5f, 0x00, 0x00, 0x00, // '!'
    0x00, 0x07, 0x07, 0x07, 0x07, 0x07, 0x07, 0x00, // '"'
    0x14, 0x7f, 0x7f, 0x7f, 0x7f, 0x7f, 0x7f, 0x14, // '#'
    0x24, 0x2e, 0x2e, 0x7f, 0x7f, 0x3a, 0x3a, 0x12, // '$'
    0x23, 0x33, 0x33, 0x1b, 0x6c, 0x66, 0x66, 0x62, // '%'
    0x36, 0x7f, 0x7f, 0x5d, 0x77, 0x72, 0x72, 0x50, // '&'
    0x00, 0x05, 0x05, 0x07, 0x03, 0x00, 0x00, 0x00, // '\''
    0x00, 0x1c, 0x1c, 0x3e, 0x63, 0x41, 0x41, 0x00, // '('
    0x00, 0x41, 0x41, 0x63, 0x3e, 0x1c, 0x1c, 0x00, // ')'
    0x14, 0x1c, 0x1c, 0x3e, 0x3e, 0x1c, 0x1c, 0x14, // '*'
    0x08, 0x08, 0x08, 0x3e, 0x3e, 0x08, 0x08, 0x08, // '+'
    0x00, 0x50, 0x50, 0x70, 0x30, 0x00, 0x00, 0x00, // ','
    0x08, 0x08, 0x08, 0x08, 0x08, 0x08, 0x08, 0x08, // '-'
    0x00, 0x60, 0x60, 0x60, 0x60, 0x00, 0x00, 0x00, // '.'
    0x20, 0x30, 0x30, 0x18, 0x0c, 0x06, 0x06, 0x02, // '/'
    0x3e, 0x7f, 0x7f, 0x59, 0x4d, 0x7f, 0x7f, 0x3e, // '0'
    0x00, 0x42, 0x42, 0x7f, 0x7f, 0x40, 0x40, 0x00, // '1'
    0x42, 0x63, 0x63, 0x71, 0x59, 0x4f, 0x4f, 0x46, // '2'
    0x21, 0x61, 0x61, 0x45, 0x4f, 0x7b, 0x7b, 0x31, // '3'
    0x18, 0x1c, 0x1c, 0x16, 0x7f, 0x7f, 0x7f, 0x10, // '4'
    0x27, 0x67, 0x67, 0x45, 0x45, 0x7d, 0x7d, 0x39, // '5'
    0x3c, 0x7e, 0x7e, 0x4b, 0x49, 0x79, 0x79, 0x30, // '6'
    0x01, 0x71, 0x71, 0x79, 0x0d, 0x07, 0x07, 0x03, // '7'
    0x36, 0x7f, 0x7f, 0x49, 0x49, 0x7f, 0x7f, 0x36, // '8'
    0x06, 0x4f, 0x4f, 0x49, 0x69, 0x3f, 0x3f, 0x1e, // '9'
    0x00, 0x36, 0x36, 0x36, 0x36, 0x00, 0x00, 0x00, // ':'
    0x00, 0x56, 0x56, 0x76, 0x36, 0x00, 0x00, 0x00, // ';'
    0x08, 0x1c, 0x1c, 0x36, 0x63, 0x41, 0x41, 0x00, // '<'
    0x14, 0x14, 0x14, 0x14, 0x14, 0x14, 0x14, 0x14, // '='
    0x00, 0x41, 0x41, 0x63, 0x36, 0x1c, 0x1c, 0x08, // '>'
    0x02, 0x03, 0x03, 0x51, 0x59, 0x0f, 0x0f, 0x06, // '?'
    0x32, 0x7b, 0x7b, 0x79, 0x79, 0x7f, 0x7f, 0x3e, // '@'
    0x7e, 0x7f, 0x7f, 0x11, 0x11, 0x7f, 0x7f, 0x7e, // 'A'
    0x7f, 0x7f, 0x7f, 0x49, 0x49, 0x7f, 0x7f, 0x36, // 'B'
    0x3e, 0x7f, 0x7f, 0x41, 0x41, 0x63, 0x63, 0x22, // 'C'
    0x7f, 0x7f, 0x7f, 0x41, 0x63, 0x3e, 0x3e, 0x1c, // 'D'
    0x7f, 0x7f, 0x7f, 0x49, 0x49, 0x49, 0x49, 0x41, // 'E'
    0x7f, 0x7f, 0x7f, 0x09, 0x09, 0x09, 0x09, 0x01, // 'F'
    0x3e, 0x7f, 0x7f, 0x49, 0x49, 0x7b, 0x7b, 0x7a, // 'G'
    0x7f, 0x7f, 0x7f, 0x08, 0x08, 0x7f, 0x7f, 0x7f, // 'H'
    0x00, 0x41, 0x41, 0x7f, 0x7f, 0x41, 0x41, 0x00, // 'I'
    0x20, 0x60, 0x60, 0x41, 0x7f, 0x3f, 0x3f, 0x01, // 'J'
    0x7f, 0x7f, 0x7f, 0x1c, 0x36, 0x63, 0x63, 0x41, // 'K'
    0x7f, 0x7f, 0x7f, 0x40, 0x40, 0x40, 0x40, 0x40, // 'L'
    0x7f, 0x7f, 0x7f, 0x0e, 0x0e, 0x7f, 0x7f, 0x7f, // 'M'
    0x7f, 0x7f, 0x7f, 0x0c, 0x18, 0x7f, 0x7f, 0x7f, // 'N'
    0x3e, 0x7f, 0x7f, 0x41, 0x41, 0x7f, 0x7f, 0x3e, // 'O'
    0x7f, 0x7f, 0x7f, 0x09, 0x09, 0x0f, 0x0f, 0x06, // 'P'
    0x3e, 0x7f, 0x7f, 0x51, 0x71, 0x7f, 0x7f, 0x5e, // 'Q'
    0x7f, 0x7f, 0x7f, 0x19, 0x39, 0x6f, 0x6f, 0x46, // 'R'
    0x46, 0x4f, 0x4f, 0x49, 0x49, 0x79, 0x79, 0x31, // 'S'
    0x01, 0x01, 0x01, 0x7f, 0x7f, 0x01, 0x01, 0x01, // 'T'
    0x3f, 0x7f, 0x7f, 0x40, 0x40, 0x7f, 0x7f, 0x3f, // 'U'
    0x1f, 0x3f, 0x3f, 0x60, 0x60, 0x3f, 0x3f, 0x1f, // 'V'
    0x3f, 0x7f, 0x7f, 0x78, 0x78, 0x7f, 0x7f, 0x3f, // 'W'
    0x63, 0x77, 0x77, 0x1c, 0x1c, 0x77, 0x77, 0x63, // 'X'
    0x07, 0x0f, 0x0f, 0x78, 0x78, 0x0f, 0x0f, 0x07, // 'Y'
    0x61, 0x71, 0x71, 0x59, 0x4d, 0x47, 0x47, 0x43, // 'Z'
    0x00, 0x7f, 0x7f, 0x7f, 0x41, 0x41, 0x41, 0x00, // '['
    0x02, 0x06, 0x06, 0x0c, 0x18, 0x30, 0x30, 0x20, // '\\'
    0x00, 0x41, 0x41, 0x41, 0x7f, 0x7f, 0x7f, 0x00, // ']'
    0x04, 0x06, 0x06, 0x03, 0x03, 0x06, 0x06, 0x04, // '^'
    0x40, 0x40, 0x40, 0x40, 0x40, 0x40, 0x40, 0x40, // '_'
];

pub static FONT_HOMESPUN: [u8; 665] = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // ' '
    0x00, 0x00, 0x00, 0x5f, 0x00, 0x00, 0x00, // '!'
    0x00, 0x07, 0x07, 0x00, 0x07, 0x07, 0x00, // '"'
    0x14, 0x7f, 0x7f, 0x14, 0x7f, 0x7f, 0x14, // '#'
    0x24, 0x2e, 0x2a, 0x7f, 0x2a, 0x3a, 0x12, // '$'
    0x23, 0x33, 0x13, 0x08, 0x64, 0x66, 0x62, // '%'
    0x36, 0x7f, 0x49, 0x55, 0x22, 0x72, 0x50, // '&'
    0x00, 0x05, 0x05, 0x03, 0x00, 0x00, 0x00, // '\''
    0x00, 0x1c, 0x1c, 0x22, 0x41, 0x41, 0x00, // '('
    0x00, 0x41, 0x41, 0x22, 0x1c, 0x1c, 0x00, // ')'
    0x14, 0x1c, 0x08, 0x3e, 0x08, 0x1c, 0x14, // '*'
    0x08, 0x08, 0x08, 0x3e, 0x08, 0x08, 0x08, // '+'
    0x00, 0x50, 0x50, 0x30, 0x00, 0x00, 0x00, // ','
    0x08, 0x08, 0x08, 0x08, 0x08, 0x08, 0x08, // '-'
    0x00, 0x60, 0x60, 0x60, 0x00, 0x00, 0x00, // '.'
    0x20, 0x30, 0x10, 0x08, 0x04, 0x06, 0x02, // '/'
    0x3e, 0x7f, 0x51, 0x49, 0x45, 0x7f, 0x3e, // '0'
    0x00, 0x42, 0x42, 0x7f, 0x40, 0x40, 0x00, // '1'
    0x42, 0x63, 0x61, 0x51, 0x49, 0x4f, 0x46, // '2'
    0x21, 0x61, 0x41, 0x45, 0x4b, 0x7b, 0x31, // '3'
    0x18, 0x1c, 0x14, 0x12, 0x7f, 0x7f, 0x10, // '4'
    0x27, 0x67, 0x45, 0x45, 0x45, 0x7d, 0x39, // '5'
    0x3c, 0x7e, 0x4a, 0x49, 0x49, 0x79, 0x30, // '6'
    0x01, 0x71, 0x71, 0x09, 0x05, 0x07, 0x03, // '7'
    0x36, 0x7f, 0x49, 0x49, 0x49, 0x7f, 0x36, // '8'
    0x06, 0x4f, 0x49, 0x49, 0x29, 0x3f, 0x1e, // '9'
    0x00, 0x36, 0x36, 0x36, 0x00, 0x00, 0x00, // ':'
    0x00, 0x56, 0x56, 0x36, 0x00, 0x00, 0x00, // ';'
    0x08, 0x1c, 0x14, 0x22, 0x41, 0x41, 0x00, // '<'
    0x14, 0x14, 0x14, 0x14, 0x14, 0x14, 0x14, // '='
    0x00, 0x41, 0x41, 0x22, 0x14, 0x1c, 0x08, // '>'
    0x02, 0x03, 0x01, 0x51, 0x09, 0x0f, 0x06, // '?'
    0x32, 0x7b, 0x49, 0x79, 0x41, 0x7f, 0x3e, // '@'
    0x7e, 0x7f, 0x11, 0x11, 0x11, 0x7f, 0x7e, // 'A'
    0x7f, 0x7f, 0x49, 0x49, 0x49, 0x7f, 0x36, // 'B'
    0x3e, 0x7f, 0x41, 0x41, 0x41, 0x63, 0x22, // 'C'
    0x7f, 0x7f, 0x41, 0x41, 0x22, 0x3e, 0x1c, // 'D'
    0x7f, 0x7f, 0x49, 0x49, 0x49, 0x49, 0x41, // 'E'
    0x7f, 0x7f, 0x09, 0x09, 0x09, 0x09, 0x01, // 'F'
    0x3e, 0x7f, 0x41, 0x49, 0x49, 0x7b, 0x7a, // 'G'
    0x7f, 0x7f, 0x08, 0x08, 0x08, 0x7f, 0x7f, // 'H'
    0x00, 0x41, 0x41, 0x7f, 0x41, 0x41, 0x00, // 'I'
    0x20, 0x60, 0x40, 0x41, 0x3f, 0x3f, 0x01, // 'J'
    0x7f, 0x7f, 0x08, 0x14, 0x22, 0x63, 0x41, // 'K'
    0x7f, 0x7f, 0x40, 0x40, 0x40, 0x40, 0x40, // 'L'
    0x7f, 0x7f, 0x02, 0x0c, 0x02, 0x7f, 0x7f, // 'M'
    0x7f, 0x7f, 0x04, 0x08, 0x10, 0x7f, 0x7f, // 'N'
    0x3e, 0x7f, 0x41, 0x41, 0x41, 0x7f, 0x3e, // 'O'
    0x7f, 0x7f, 0x09, 0x09, 0x09, 0x0f, 0x06, // 'P'
    0x3e, 0x7f, 0x41, 0x51, 0x21, 0x7f, 0x5e, // 'Q'
    0x7f, 0x7f, 0x09, 0x19, 0x29, 0x6f, 0x46, // 'R'
    0x46, 0x4f, 0x49, 0x49, 0x49, 0x79, 0x31, // 'S'
    0x01, 0x01, 0x01, 0x7f, 0x01, 0x01, 0x01, // 'T'
    0x3f, 0x7f, 0x40, 0x40, 0x40, 0x7f, 0x3f, // 'U'
    0x1f, 0x3f, 0x20, 0x40, 0x20, 0x3f, 0x1f, // 'V'
    0x3f, 0x7f, 0x40, 0x38, 0x40, 0x7f, 0x3f, // 'W'
    0x63, 0x77, 0x14, 0x08, 0x14, 0x77, 0x63, // 'X'
    0x07, 0x0f, 0x08, 0x70, 0x08, 0x0f, 0x07, // 'Y'
    0x61, 0x71, 0x51, 0x49, 0x45, 0x47, 0x43, // 'Z'
    0x00, 0x7f, 0x7f, 0x41, 0x41, 0x41, 0x00, // '['
    0x02, 0x06, 0x04, 0x08, 0x10, 0x30, 0x20, // '\\'
    0x00, 0x41, 0x41, 0x41, 0x7f, 0x7f, 0x00, // ']'
    0x04, 0x06, 0x02, 0x01, 0x02, 0x06, 0x04, // '^'
    0x40, 0x40, 0x40, 0x40, 0x40, 0x40, 0x40, // '_'
    0x00, 0x01, 0x01, 0x02, 0x04, 0x04, 0x00, // '`'
    0x20, 0x74, 0x54, 0x54, 0x54, 0x7c, 0x78, // 'a'
    0x7f, 0x7f, 0x48, 0x44, 0x44, 0x7c, 0x38, // 'b'
    0x38, 0x7c, 0x44, 0x44, 0x44, 0x64, 0x20, // 'c'
    0x38, 0x7c, 0x44, 0x44, 0x48, 0x7f, 0x7f, // 'd'
    0x38, 0x7c, 0x54, 0x54, 0x54, 0x5c, 0x18, // 'e'
    0x08, 0x7e, 0x7e, 0x09, 0x01, 0x03, 0x02, // 'f'
    0x0c, 0x5e, 0x52, 0x52, 0x52, 0x7e, 0x3e, // 'g'
    0x7f, 0x7f, 0x08, 0x04, 0x04, 0x7c, 0x78, // 'h'
    0x00, 0x44, 0x44, 0x7d, 0x40, 0x40, 0x00, // 'i'
    0x20, 0x60, 0x40, 0x44, 0x3d, 0x3d, 0x00, // 'j'
    0x7f, 0x7f, 0x10, 0x28, 0x44, 0x44, 0x00, // 'k'
    0x00, 0x41, 0x41, 0x7f, 0x40, 0x40, 0x00, // 'l'
    0x7c, 0x7c, 0x04, 0x18, 0x04, 0x7c, 0x78, // 'm'
    0x7c, 0x7c, 0x08, 0x04, 0x04, 0x7c, 0x78, // 'n'
    0x38, 0x7c, 0x44, 0x44, 0x44, 0x7c, 0x38, // 'o'
    0x7c, 0x7c, 0x14, 0x14, 0x14, 0x1c, 0x08, // 'p'
    0x08, 0x1c, 0x14, 0x14, 0x18, 0x7c, 0x7c, // 'q'
    0x7c, 0x7c, 0x08, 0x04, 0x04, 0x0c, 0x08, // 'r'
    0x48, 0x5c, 0x54, 0x54, 0x54, 0x74, 0x20, // 's'
    0x04, 0x3f, 0x3f, 0x44, 0x40, 0x60, 0x20, // 't'
    0x3c, 0x7c, 0x40, 0x40, 0x20, 0x7c, 0x7c, // 'u'
    0x1c, 0x3c, 0x20, 0x40, 0x20, 0x3c, 0x1c, // 'v'
    0x3c, 0x7c, 0x40, 0x30, 0x40, 0x7c, 0x3c, // 'w'
    0x44, 0x6c, 0x28, 0x10, 0x28, 0x6c, 0x44, // 'x'
    0x0c, 0x5c, 0x50, 0x50, 0x50, 0x7c, 0x3c, // 'y'
    0x44, 0x64, 0x64, 0x54, 0x4c, 0x4c, 0x44, // 'z'
    0x00, 0x08, 0x08, 0x36, 0x41, 0x41, 0x00, // '{'
    0x00, 0x00, 0x00, 0x7f, 0x00, 0x00, 0x00, // '|'
    0x00, 0x41, 0x41, 0x36, 0x08, 0x08, 0x00, // '}'
    0x10, 0x18, 0x08, 0x08, 0x10, 0x18, 0x08, // '~'
];

pub static FONT_TINY: [u8; 285] = [
    0x00, 0x00, 0x00, // ' '
    0x00, 0x5f, 0x00, // '!'
    0x07, 0x00, 0x07, // '"'
    0x7f, 0x14, 0x7f, // '#'
    0x2e, 0x7f, 0x3a, // '$'
    0x33, 0x08, 0x66, // '%'
    0x7f, 0x55, 0x72, // '&'
    0x05, 0x03, 0x00, // '\''
    0x1c, 0x22, 0x41, // '('
    0x41, 0x22, 0x1c, // ')'
    0x1c, 0x3e, 0x1c, // '*'
    0x08, 0x3e, 0x08, // '+'
    0x50, 0x30, 0x00, // ','
    0x08, 0x08, 0x08, // '-'
    0x60, 0x60, 0x00, // '.'
    0x30, 0x08, 0x06, // '/'
    0x7f, 0x49, 0x7f, // '0'
    0x42, 0x7f, 0x40, // '1'
    0x63, 0x51, 0x4f, // '2'
    0x61, 0x45, 0x7b, // '3'
    0x1c, 0x12, 0x7f, // '4'
    0x67, 0x45, 0x7d, // '5'
    0x7e, 0x49, 0x79, // '6'
    0x71, 0x09, 0x07, // '7'
    0x7f, 0x49, 0x7f, // '8'
    0x4f, 0x49, 0x3f, // '9'
    0x36, 0x36, 0x00, // ':'
    0x56, 0x36, 0x00, // ';'
    0x1c, 0x22, 0x41, // '<'
    0x14, 0x14, 0x14, // '='
    0x41, 0x22, 0x1c, // '>'
    0x03, 0x51, 0x0f, // '?'
    0x7b, 0x79, 0x7f, // '@'
    0x7f, 0x11, 0x7f, // 'A'
    0x7f, 0x49, 0x7f, // 'B'
    0x7f, 0x41, 0x63, // 'C'
    0x7f, 0x41, 0x3e, // 'D'
    0x7f, 0x49, 0x49, // 'E'
    0x7f, 0x09, 0x09, // 'F'
    0x7f, 0x49, 0x7b, // 'G'
    0x7f, 0x08, 0x7f, // 'H'
    0x41, 0x7f, 0x41, // 'I'
    0x60, 0x41, 0x3f, // 'J'
    0x7f, 0x14, 0x63, // 'K'
    0x7f, 0x40, 0x40, // 'L'
    0x7f, 0x0c, 0x7f, // 'M'
    0x7f, 0x08, 0x7f, // 'N'
    0x7f, 0x41, 0x7f, // 'O'
    0x7f, 0x09, 0x0f, // 'P'
    0x7f, 0x51, 0x7f, // 'Q'
    0x7f, 0x19, 0x6f, // 'R'
    0x4f, 0x49, 0x79, // 'S'
    0x01, 0x7f, 0x01, // 'T'
    0x7f, 0x40, 0x7f, // 'U'
    0x3f, 0x40, 0x3f, // 'V'
    0x7f, 0x38, 0x7f, // 'W'
    0x77, 0x08, 0x77, // 'X'
    0x0f, 0x70, 0x0f, // 'Y'
    0x71, 0x49, 0x47, // 'Z'
    0x7f, 0x41, 0x41, // '['
    0x06, 0x08, 0x30, // '\\'
    0x41, 0x41, 0x7f, // ']'
    0x06, 0x01, 0x06, // '^'
    0x40, 0x40, 0x40, // '_'
    0x01, 0x02, 0x04, // '`'
    0x74, 0x54, 0x7c, // 'a'
    0x7f, 0x44, 0x7c, // 'b'
    0x7c, 0x44, 0x64, // 'c'
    0x7c, 0x44, 0x7f, // 'd'
    0x7c, 0x54, 0x5c, // 'e'
    0x7e, 0x09, 0x03, // 'f'
    0x5e, 0x52, 0x7e, // 'g'
    0x7f, 0x04, 0x7c, // 'h'
    0x44, 0x7d, 0x40, // 'i'
    0x60, 0x44, 0x3d, // 'j'
    0x7f, 0x28, 0x44, // 'k'
    0x41, 0x7f, 0x40, // 'l'
    0x7c, 0x18, 0x7c, // 'm'
    0x7c, 0x04, 0x7c, // 'n'
    0x7c, 0x44, 0x7c, // 'o'
    0x7c, 0x14, 0x1c, // 'p'
    0x1c, 0x14, 0x7c, // 'q'
    0x7c, 0x04, 0x0c, // 'r'
    0x5c, 0x54, 0x74, // 's'
    0x3f, 0x44, 0x60, // 't'
    0x7c, 0x40, 0x7c, // 'u'
    0x3c, 0x40, 0x3c, // 'v'
    0x7c, 0x30, 0x7c, // 'w'
    0x6c, 0x10, 0x6c, // 'x'
    0x5c, 0x50, 0x7c, // 'y'
    0x64, 0x54, 0x4c, // 'z'
    0x08, 0x36, 0x41, // '{'
    0x00, 0x7f, 0x00, // '|'
    0x41, 0x36, 0x08, // '}'
    0x18, 0x08, 0x18, // '~'
];

pub static FONT_SEVEN_SEG: [u8; 380] = [
    0x00, 0x00, 0x00, 0x00, // ' '
    0x00, 0x5f, 0x5f, 0x00, // '!'
    0x00, 0x07, 0x07, 0x00, // '"'
    0x14, 0x7f, 0x7f, 0x14, // '#'
    0x24, 0x7f, 0x7f, 0x12, // '$'
    0x23, 0x1b, 0x6c, 0x62, // '%'
    0x36, 0x5d, 0x77, 0x50, // '&'
    0x00, 0x07, 0x03, 0x00, // '\''
    0x00, 0x3e, 0x63, 0x00, // '('
    0x00, 0x63, 0x3e, 0x00, // ')'
    0x14, 0x3e, 0x3e, 0x14, // '*'
    0x08, 0x3e, 0x3e, 0x08, // '+'
    0x00, 0x70, 0x30, 0x00, // ','
    0x00, 0x08, 0x08, 0x00, // '-'
    0x00, 0x60, 0x60, 0x00, // '.'
    0x20, 0x18, 0x0c, 0x02, // '/'
    0x7f, 0x41, 0x41, 0x7f, // '0'
    0x00, 0x00, 0x00, 0x7f, // '1'
    0x78, 0x49, 0x49, 0x0f, // '2'
    0x00, 0x49, 0x49, 0x7f, // '3'
    0x0f, 0x08, 0x08, 0x7f, // '4'
    0x0f, 0x49, 0x49, 0x78, // '5'
    0x7f, 0x49, 0x49, 0x78, // '6'
    0x00, 0x01, 0x01, 0x7f, // '7'
    0x7f, 0x49, 0x49, 0x7f, // '8'
    0x0f, 0x49, 0x49, 0x7f, // '9'
    0x00, 0x36, 0x36, 0x00, // ':'
    0x00, 0x76, 0x36, 0x00, // ';'
    0x08, 0x36, 0x63, 0x00, // '<'
    0x14, 0x14, 0x14, 0x14, // '='
    0x00, 0x63, 0x36, 0x08, // '>'
    0x02, 0x51, 0x59, 0x06, // '?'
    0x32, 0x79, 0x79, 0x3e, // '@'
    0x7e, 0x11, 0x11, 0x7e, // 'A'
    0x7f, 0x49, 0x49, 0x36, // 'B'
    0x3e, 0x41, 0x41, 0x22, // 'C'
    0x7f, 0x41, 0x63, 0x1c, // 'D'
    0x7f, 0x49, 0x49, 0x41, // 'E'
    0x7f, 0x09, 0x09, 0x01, // 'F'
    0x3e, 0x49, 0x49, 0x7a, // 'G'
    0x7f, 0x08, 0x08, 0x7f, // 'H'
    0x00, 0x7f, 0x7f, 0x00, // 'I'
    0x20, 0x41, 0x7f, 0x01, // 'J'
    0x7f, 0x1c, 0x36, 0x41, // 'K'
    0x7f, 0x40, 0x40, 0x40, // 'L'
    0x7f, 0x0e, 0x0e, 0x7f, // 'M'
    0x7f, 0x0c, 0x18, 0x7f, // 'N'
    0x3e, 0x41, 0x41, 0x3e, // 'O'
    0x7f, 0x09, 0x09, 0x06, // 'P'
    0x3e, 0x51, 0x71, 0x5e, // 'Q'
    0x7f, 0x19, 0x39, 0x46, // 'R'
    0x46, 0x49, 0x49, 0x31, // 'S'
    0x01, 0x7f, 0x7f, 0x01, // 'T'
    0x3f, 0x40, 0x40, 0x3f, // 'U'
    0x1f, 0x60, 0x60, 0x1f, // 'V'
    0x3f, 0x78, 0x78, 0x3f, // 'W'
    0x63, 0x1c, 0x1c, 0x63, // 'X'
    0x07, 0x78, 0x78, 0x07, // 'Y'
    0x61, 0x59, 0x4d, 0x43, // 'Z'
    0x00, 0x7f, 0x41, 0x00, // '['
    0x02, 0x0c, 0x18, 0x20, // '\\'
    0x00, 0x41, 0x7f, 0x00, // ']'
    0x04, 0x03, 0x03, 0x04, // '^'
    0x00, 0x40, 0x40, 0x00, // '_'
    0x00, 0x03, 0x06, 0x00, // '`'
    0x20, 0x54, 0x54, 0x78, // 'a'
    0x7f, 0x4c, 0x44, 0x38, // 'b'
    0x38, 0x44, 0x44, 0x20, // 'c'
    0x38, 0x44, 0x4c, 0x7f, // 'd'
    0x38, 0x54, 0x54, 0x18, // 'e'
    0x08, 0x7f, 0x09, 0x02, // 'f'
    0x0c, 0x52, 0x52, 0x3e, // 'g'
    0x7f, 0x0c, 0x04, 0x78, // 'h'
    0x00, 0x7d, 0x7d, 0x00, // 'i'
    0x20, 0x44, 0x7d, 0x00, // 'j'
    0x7f, 0x38, 0x6c, 0x00, // 'k'
    0x00, 0x7f, 0x7f, 0x00, // 'l'
    0x7c, 0x1c, 0x1c, 0x78, // 'm'
    0x7c, 0x0c, 0x04, 0x78, // 'n'
    0x38, 0x44, 0x44, 0x38, // 'o'
    0x7c, 0x14, 0x14, 0x08, // 'p'
    0x08, 0x14, 0x1c, 0x7c, // 'q'
    0x7c, 0x0c, 0x04, 0x08, // 'r'
    0x48, 0x54, 0x54, 0x20, // 's'
    0x04, 0x7f, 0x44, 0x20, // 't'
    0x3c, 0x40, 0x60, 0x7c, // 'u'
    0x1c, 0x60, 0x60, 0x1c, // 'v'
    0x3c, 0x70, 0x70, 0x3c, // 'w'
    0x44, 0x38, 0x38, 0x44, // 'x'
    0x0c, 0x50, 0x50, 0x3c, // 'y'
    0x44, 0x74, 0x5c, 0x44, // 'z'
    0x00, 0x3e, 0x77, 0x00, // '{'
    0x00, 0x7f, 0x7f, 0x00, // '|'
    0x00, 0x77, 0x3e, 0x00, // '}'
    0x10, 0x08, 0x18, 0x08, // '~'
];

pub static FONT_BIG_NUM: [u8; 704] = [
    // '0'
    0x00, 0x00, 0x00, 0x00, 0x3f, 0xff, 0xff, 0xfc, 0x7f, 0xff, 0xff, 0xfe, 0x7f, 0xff, 0xff, 0xfe,
    0x7f, 0xff, 0xff, 0xfe, 0x78, 0x00, 0x00, 0x1e, 0x78, 0x00, 0x00, 0x1e, 0x78, 0x00, 0x00, 0x1e,
    0x78, 0x00, 0x00, 0x1e, 0x78, 0x00, 0x00, 0x1e, 0x78, 0x00, 0x00, 0x1e, 0x7f, 0xff, 0xff, 0xfe,
    0x7f, 0xff, 0xff, 0xfe, 0x7f, 0xff, 0xff, 0xfe, 0x3f, 0xff, 0xff, 0xfc, 0x00, 0x00, 0x00, 0x00,
    // '1'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x3f, 0xff, 0xff, 0xfc,
    0x3f, 0xff, 0xff, 0xfc, 0x3f, 0xff, 0xff, 0xfc, 0x3f, 0xff, 0xff, 0xfc, 0x00, 0x00, 0x00, 0x00,
    // '2'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xff, 0xfc, 0x78, 0x03, 0xff, 0xfe, 0x78, 0x03, 0xff, 0xfe,
    0x78, 0x03, 0xff, 0xfe, 0x78, 0x03, 0xc0, 0x1e, 0x78, 0x03, 0xc0, 0x1e, 0x78, 0x03, 0xc0, 0x1e,
    0x78, 0x03, 0xc0, 0x1e, 0x78, 0x03, 0xc0, 0x1e, 0x78, 0x03, 0xc0, 0x1e, 0x7f, 0xff, 0xc0, 0x1e,
    0x7f, 0xff, 0xc0, 0x1e, 0x7f, 0xff, 0xc0, 0x1e, 0x3f, 0xff, 0x80, 0x00, 0x00, 0x00, 0x00, 0x00,
    // '3'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x78, 0x03, 0xc0, 0x1e, 0x78, 0x03, 0xc0, 0x1e,
    0x78, 0x03, 0xc0, 0x1e, 0x78, 0x03, 0xc0, 0x1e, 0x78, 0x03, 0xc0, 0x1e, 0x78, 0x03, 0xc0, 0x1e,
    0x78, 0x03, 0xc0, 0x1e, 0x78, 0x03, 0xc0, 0x1e, 0x78, 0x03, 0xc0, 0x1e, 0x7f, 0xff, 0xff, 0xfe,
    0x7f, 0xff, 0xff, 0xfe, 0x7f, 0xff, 0xff, 0xfe, 0x3f, 0xff, 0xff, 0xfc, 0x00, 0x00, 0x00, 0x00,
    // '4'
    0x00, 0x00, 0x00, 0x00, 0x3f, 0xff, 0x80, 0x00, 0x3f, 0xff, 0xc0, 0x00, 0x3f, 0xff, 0xc0, 0x00,
    0x3f, 0xff, 0xc0, 0x00, 0x00, 0x03, 0xc0, 0x00, 0x00, 0x03, 0xc0, 0x00, 0x00, 0x03, 0xc0, 0x00,
    0x00, 0x03, 0xc0, 0x00, 0x00, 0x03, 0xc0, 0x00, 0x00, 0x03, 0xc0, 0x00, 0x3f, 0xff, 0xff, 0xfc,
    0x3f, 0xff, 0xff, 0xfc, 0x3f, 0xff, 0xff, 0xfc, 0x3f, 0xff, 0xff, 0xfc, 0x00, 0x00, 0x00, 0x00,
    // '5'
    0x00, 0x00, 0x00, 0x00, 0x3f, 0xff, 0x80, 0x00, 0x7f, 0xff, 0xc0, 0x1e, 0x7f, 0xff, 0xc0, 0x1e,
    0x7f, 0xff, 0xc0, 0x1e, 0x78, 0x03, 0xc0, 0x1e, 0x78, 0x03, 0xc0, 0x1e, 0x78, 0x03, 0xc0, 0x1e,
    0x78, 0x03, 0xc0, 0x1e, 0x78, 0x03, 0xc0, 0x1e, 0x78, 0x03, 0xc0, 0x1e, 0x78, 0x03, 0xff, 0xfe,
    0x78, 0x03, 0xff, 0xfe, 0x78, 0x03, 0xff, 0xfe, 0x00, 0x00, 0xff, 0xfc, 0x00, 0x00, 0x00, 0x00,
    // '6'
    0x00, 0x00, 0x00, 0x00, 0x3f, 0xff, 0xff, 0xfc, 0x7f, 0xff, 0xff, 0xfe, 0x7f, 0xff, 0xff, 0xfe,
    0x7f, 0xff, 0xff, 0xfe, 0x78, 0x03, 0xc0, 0x1e, 0x78, 0x03, 0xc0, 0x1e, 0x78, 0x03, 0xc0, 0x1e,
    0x78, 0x03, 0xc0, 0x1e, 0x78, 0x03, 0xc0, 0x1e, 0x78, 0x03, 0xc0, 0x1e, 0x78, 0x03, 0xff, 0xfe,
    0x78, 0x03, 0xff, 0xfe, 0x78, 0x03, 0xff, 0xfe, 0x00, 0x00, 0xff, 0xfc, 0x00, 0x00, 0x00, 0x00,
    // '7'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x78, 0x00, 0x00, 0x00, 0x78, 0x00, 0x00, 0x00,
    0x78, 0x00, 0x00, 0x00, 0x78, 0x00, 0x00, 0x00, 0x78, 0x00, 0x00, 0x00, 0x78, 0x00, 0x00, 0x00,
    0x78, 0x00, 0x00, 0x00, 0x78, 0x00, 0x00, 0x00, 0x78, 0x00, 0x00, 0x00, 0x7f, 0xff, 0xff, 0xfc,
    0x7f, 0xff, 0xff, 0xfc, 0x7f, 0xff, 0xff, 0xfc, 0x3f, 0xff, 0xff, 0xfc, 0x00, 0x00, 0x00, 0x00,
    // '8'
    0x00, 0x00, 0x00, 0x00, 0x3f, 0xff, 0xff, 0xfc, 0x7f, 0xff, 0xff, 0xfe, 0x7f, 0xff, 0xff, 0xfe,
    0x7f, 0xff, 0xff, 0xfe, 0x78, 0x03, 0xc0, 0x1e, 0x78, 0x03, 0xc0, 0x1e, 0x78, 0x03, 0xc0, 0x1e,
    0x78, 0x03, 0xc0, 0x1e, 0x78, 0x03, 0xc0, 0x1e, 0x78, 0x03, 0xc0, 0x1e, 0x7f, 0xff, 0xff, 0xfe,
    0x7f, 0xff, 0xff, 0xfe, 0x7f, 0xff, 0xff, 0xfe, 0x3f, 0xff, 0xff, 0xfc, 0x00, 0x00, 0x00, 0x00,
    // '9'
    0x00, 0x00, 0x00, 0x00, 0x3f, 0xff, 0x80, 0x00, 0x7f, 0xff, 0xc0, 0x1e, 0x7f, 0xff, 0xc0, 0x1e,
    0x7f, 0xff, 0xc0, 0x1e, 0x78, 0x03, 0xc0, 0x1e, 0x78, 0x03, 0xc0, 0x1e, 0x78, 0x03, 0xc0, 0x1e,
    0x78, 0x03, 0xc0, 0x1e, 0x78, 0x03, 0xc0, 0x1e, 0x78, 0x03, 0xc0, 0x1e, 0x7f, 0xff, 0xff, 0xfe,
    0x7f, 0xff, 0xff, 0xfe, 0x7f, 0xff, 0xff, 0xfe, 0x3f, 0xff, 0xff, 0xfc, 0x00, 0x00, 0x00, 0x00,
    // ':'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x70, 0x0e, 0x00, 0x00, 0x70, 0x0e, 0x00,
    0x00, 0x70, 0x0e, 0x00, 0x00, 0x70, 0x0e, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

pub static FONT_MED_NUM: [u8; 352] = [
    // '0'
    0x00, 0x00, 0x3f, 0xfc, 0x7f, 0xfe, 0x60, 0x06, 0x60, 0x06, 0x60, 0x06, 0x60, 0x06, 0x60, 0x06,
    0x60, 0x06, 0x60, 0x06, 0x60, 0x06, 0x60, 0x06, 0x60, 0x06, 0x7f, 0xfe, 0x3f, 0xfc, 0x00, 0x00,
    // '1'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x3f, 0xfc, 0x3f, 0xfc, 0x00, 0x00,
    // '2'
    0x00, 0x00, 0x00, 0xfc, 0x61, 0xfe, 0x61, 0x86, 0x61, 0x86, 0x61, 0x86, 0x61, 0x86, 0x61, 0x86,
    0x61, 0x86, 0x61, 0x86, 0x61, 0x86, 0x61, 0x86, 0x61, 0x86, 0x7f, 0x86, 0x3f, 0x80, 0x00, 0x00,
    // '3'
    0x00, 0x00, 0x00, 0x00, 0x61, 0x86, 0x61, 0x86, 0x61, 0x86, 0x61, 0x86, 0x61, 0x86, 0x61, 0x86,
    0x61, 0x86, 0x61, 0x86, 0x61, 0x86, 0x61, 0x86, 0x61, 0x86, 0x7f, 0xfe, 0x3f, 0xfc, 0x00, 0x00,
    // '4'
    0x00, 0x00, 0x3f, 0x80, 0x3f, 0x80, 0x01, 0x80, 0x01, 0x80, 0x01, 0x80, 0x01, 0x80, 0x01, 0x80,
    0x01, 0x80, 0x01, 0x80, 0x01, 0x80, 0x01, 0x80, 0x01, 0x80, 0x3f, 0xfc, 0x3f, 0xfc, 0x00, 0x00,
    // '5'
    0x00, 0x00, 0x3f, 0x80, 0x7f, 0x86, 0x61, 0x86, 0x61, 0x86, 0x61, 0x86, 0x61, 0x86, 0x61, 0x86,
    0x61, 0x86, 0x61, 0x86, 0x61, 0x86, 0x61, 0x86, 0x61, 0x86, 0x61, 0xfe, 0x00, 0xfc, 0x00, 0x00,
    // '6'
    0x00, 0x00, 0x3f, 0xfc, 0x7f, 0xfe, 0x61, 0x86, 0x61, 0x86, 0x61, 0x86, 0x61, 0x86, 0x61, 0x86,
    0x61, 0x86, 0x61, 0x86, 0x61, 0x86, 0x61, 0x86, 0x61, 0x86, 0x61, 0xfe, 0x00, 0xfc, 0x00, 0x00,
    // '7'
    0x00, 0x00, 0x00, 0x00, 0x60, 0x00, 0x60, 0x00, 0x60, 0x00, 0x60, 0x00, 0x60, 0x00, 0x60, 0x00,
    0x60, 0x00, 0x60, 0x00, 0x60, 0x00, 0x60, 0x00, 0x60, 0x00, 0x7f, 0xfc, 0x3f, 0xfc, 0x00, 0x00,
    // '8'
    0x00, 0x00, 0x3f, 0xfc, 0x7f, 0xfe, 0x61, 0x86, 0x61, 0x86, 0x61, 0x86, 0x61, 0x86, 0x61, 0x86,
    0x61, 0x86, 0x61, 0x86, 0x61, 0x86, 0x61, 0x86, 0x61, 0x86, 0x7f, 0xfe, 0x3f, 0xfc, 0x00, 0x00,
    // '9'
    0x00, 0x00, 0x3f, 0x80, 0x7f, 0x86, 0x61, 0x86, 0x61, 0x86, 0x61, 0x86, 0x61, 0x86, 0x61, 0x86,
    0x61, 0x86, 0x61, 0x86, 0x61, 0x86, 0x61, 0x86, 0x61, 0x86, 0x7f, 0xfe, 0x3f, 0xfc, 0x00, 0x00,
    // ':'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x0e, 0x70, 0x0e, 0x70,
    0x0e, 0x70, 0x0e, 0x70, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];
