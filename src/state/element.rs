/// Cell alphabet of the Codenjoy Bomberman board encoding.
///
/// `BombTimer(n)` carries the remaining fuse ticks (1..=5). A bomberman
/// standing on its own freshly planted bomb is a distinct glyph, since the
/// bomb occupies the same cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    Space,
    Wall,
    DestructibleWall,
    Bomberman,
    BombBomberman,
    DeadBomberman,
    OtherBomberman,
    OtherBombBomberman,
    OtherDeadBomberman,
    BombTimer(u8),
    Boom,
    MeatChopper,
    DeadMeatChopper,
}

impl Element {
    pub fn from_char(symbol: char) -> Element {
        match symbol {
            ' ' => Element::Space,
            '☼' => Element::Wall,
            '#' => Element::DestructibleWall,
            '☺' => Element::Bomberman,
            '☻' => Element::BombBomberman,
            'Ѡ' => Element::DeadBomberman,
            '♥' => Element::OtherBomberman,
            '♠' => Element::OtherBombBomberman,
            '♣' => Element::OtherDeadBomberman,
            '1'..='5' => Element::BombTimer(symbol as u8 - b'0'),
            '҉' => Element::Boom,
            '&' => Element::MeatChopper,
            'x' => Element::DeadMeatChopper,
            // Unknown glyphs block movement, same as a solid wall.
            _ => Element::Wall,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Element::Space => ' ',
            Element::Wall => '☼',
            Element::DestructibleWall => '#',
            Element::Bomberman => '☺',
            Element::BombBomberman => '☻',
            Element::DeadBomberman => 'Ѡ',
            Element::OtherBomberman => '♥',
            Element::OtherBombBomberman => '♠',
            Element::OtherDeadBomberman => '♣',
            Element::BombTimer(ticks) => (b'0' + ticks) as char,
            Element::Boom => '҉',
            Element::MeatChopper => '&',
            Element::DeadMeatChopper => 'x',
        }
    }

    /// Remaining fuse ticks when this cell holds a bomb. A bomberman glyph on
    /// its own bomb means the fuse was just lit and still has the full count.
    pub fn bomb_ticks(self) -> Option<i32> {
        match self {
            Element::BombTimer(ticks) => Some(ticks as i32),
            Element::BombBomberman | Element::OtherBombBomberman => Some(5),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_codec_round_trip() {
        let elements = [
            Element::Space,
            Element::Wall,
            Element::DestructibleWall,
            Element::Bomberman,
            Element::BombBomberman,
            Element::OtherBomberman,
            Element::BombTimer(3),
            Element::Boom,
            Element::MeatChopper,
        ];
        for element in elements {
            assert_eq!(Element::from_char(element.to_char()), element);
        }
    }

    #[test]
    fn test_timer_glyphs_carry_ticks() {
        assert_eq!(Element::from_char('1'), Element::BombTimer(1));
        assert_eq!(Element::from_char('5'), Element::BombTimer(5));
        assert_eq!(Element::BombTimer(4).bomb_ticks(), Some(4));
    }

    #[test]
    fn test_planted_bomb_has_full_fuse() {
        assert_eq!(Element::BombBomberman.bomb_ticks(), Some(5));
        assert_eq!(Element::OtherBombBomberman.bomb_ticks(), Some(5));
        assert_eq!(Element::Bomberman.bomb_ticks(), None);
    }

    #[test]
    fn test_unknown_glyph_reads_as_wall() {
        assert_eq!(Element::from_char('?'), Element::Wall);
    }
}
