use ratatui::style::Color;

pub const SNOW: Color = Color::from_u32(0xFFFFFF);
pub const DARK_GREEN: Color = Color::from_u32(0x165B33);
pub const LIGHT_GREEN: Color = Color::from_u32(0x22A54D);
pub const BROWN: Color = Color::from_u32(0x654321);
pub const RED: Color = Color::from_u32(0xC1292E);
pub const YELLOW: Color = Color::from_u32(0xFFD700);
pub const LIGHT_BLUE: Color = Color::from_u32(0x87CEEB);
pub const DARK_BLUE: Color = Color::from_u32(0x1A1A2E);
pub const ORANGE: Color = Color::from_u32(0xFF6B35);
pub const STAR: Color = Color::from_u32(0xFFF700);
pub const PINK: Color = Color::from_u32(0xFF69B4);
pub const BLACK: Color = Color::from_u32(0x000000);

pub const DIRT: Color = Color::from_u32(0x8B7355);
pub const ROPE: Color = Color::from_u32(0x8B4513);
pub const SILVER: Color = Color::from_u32(0xC0C0C0);
pub const CRATER: Color = Color::from_u32(0xD3D3D3);
pub const WINDOW_FRAME: Color = Color::from_u32(0x333333);
pub const MAROON: Color = Color::from_u32(0x8B0000);
pub const TAN: Color = Color::from_u32(0xD2B48C);
pub const WHEAT: Color = Color::from_u32(0xF5DEB3);
pub const BURLYWOOD: Color = Color::from_u32(0xDEB887);

pub const FUR_DARK: Color = Color::from_u32(0x654321);
pub const FUR: Color = Color::from_u32(0x8B7355);
pub const FUR_LIGHT: Color = Color::from_u32(0xA0826D);

pub const BACKGROUND: Color = DARK_BLUE;
