// Layout system - 반응형 레이아웃 시스템
//
// 터미널 너비에 따른 카드 열 수:
// - 100+ cols: 4열
// - 60-99 cols: 2열
// - 40-59 cols: 1열
// - <40 cols 또는 높이 부족: 경고 메시지 표시

use crate::ui::i18n::TextDirection;
use ratatui::layout::{Constraint, Direction, Flex, Layout, Rect};

/// 최소 터미널 크기 상수
pub const MIN_WIDTH: u16 = 40;
pub const MIN_HEIGHT: u16 = 20;
pub const TWO_COLUMN_MIN_WIDTH: u16 = 60;
pub const FOUR_COLUMN_MIN_WIDTH: u16 = 100;

/// 카드 한 장의 높이 (테두리 포함)
pub const CARD_HEIGHT: u16 = 7;
/// 본문 최대 너비
pub const CONTENT_MAX_WIDTH: u16 = 110;
/// 언어 버튼 너비 (" EN ")
pub const BUTTON_WIDTH: u16 = 4;
pub const BUTTON_GAP: u16 = 1;
pub const ICON_SLOT_WIDTH: u16 = 5;
pub const ICON_GAP: u16 = 4;
pub const CARD_GAP: u16 = 2;

const HEADER_HEIGHT: u16 = 1;
const TITLE_HEIGHT: u16 = 1;
const MESSAGE_HEIGHT: u16 = 2;
const ICON_ROW_HEIGHT: u16 = 1;
const SPACING: u16 = 1;

/// 레이아웃 모드
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// 카드 열 수와 함께 정상 표시
    Card { columns: u16 },
    /// 경고 모드 (터미널이 너무 작음)
    TooSmall,
}

/// 레이아웃 영역
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutAreas {
    /// 언어 전환 버튼 (표시 순서)
    pub language_buttons: Vec<Rect>,
    pub header: Rect,
    pub title: Rect,
    pub message: Rect,
    /// 아이콘 칸 (표시 순서)
    pub icons: Vec<Rect>,
    /// 카드 칸 (표시 순서)
    pub cards: Vec<Rect>,
    /// 하단 커맨드 바 영역
    pub command_bar: Rect,
    /// 장식(컨페티, 배경 도형) 영역
    pub backdrop: Rect,
    /// 경고 메시지 영역 (TooSmall 모드에서 사용)
    pub warning: Rect,
}

/// 레이아웃 상태
#[derive(Debug, Clone)]
pub struct LayoutState {
    pub mode: LayoutMode,
    pub terminal_size: (u16, u16),
    pub areas: LayoutAreas,
}

impl Default for LayoutState {
    fn default() -> Self {
        Self {
            mode: LayoutMode::Card { columns: 4 },
            terminal_size: (100, 30),
            areas: LayoutAreas::default(),
        }
    }
}

/// 레이아웃 매니저
#[derive(Debug, Default)]
pub struct LayoutManager {
    state: LayoutState,
}

impl LayoutManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// 터미널 크기에 따라 레이아웃 모드 결정
    fn determine_mode(width: u16, height: u16) -> LayoutMode {
        if width < MIN_WIDTH || height < MIN_HEIGHT {
            LayoutMode::TooSmall
        } else if width < TWO_COLUMN_MIN_WIDTH {
            LayoutMode::Card { columns: 1 }
        } else if width < FOUR_COLUMN_MIN_WIDTH {
            LayoutMode::Card { columns: 2 }
        } else {
            LayoutMode::Card { columns: 4 }
        }
    }

    /// 터미널 크기/방향 업데이트 및 레이아웃 재계산
    pub fn update(&mut self, area: Rect, direction: TextDirection) {
        self.state.terminal_size = (area.width, area.height);
        self.state.mode = Self::determine_mode(area.width, area.height);
        self.state.areas = match self.state.mode {
            LayoutMode::TooSmall => LayoutAreas {
                warning: area,
                ..Default::default()
            },
            LayoutMode::Card { columns } => Self::calculate_card_areas(area, columns, direction),
        };
    }

    fn calculate_card_areas(area: Rect, columns: u16, direction: TextDirection) -> LayoutAreas {
        // 메인 수직 레이아웃: 언어 버튼 | 본문 | 커맨드바
        let [top_bar, body, command_bar] = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(3),
                Constraint::Length(1),
            ])
            .areas(area);

        let language_buttons = Self::button_slots(top_bar, direction);

        let content_width = body.width.saturating_sub(4).min(CONTENT_MAX_WIDTH);
        let [content_column] = Layout::horizontal([Constraint::Length(content_width)])
            .flex(Flex::Center)
            .areas(body);

        let card_rows = 4u16.div_ceil(columns);
        let cards_height = card_rows * CARD_HEIGHT;

        // 본문 수직 배치 (가운데 정렬, 넘치면 카드 영역이 잘림)
        let [header, _, title, _, message, _, icon_row, _, cards_area] = Layout::vertical([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(SPACING),
            Constraint::Length(TITLE_HEIGHT),
            Constraint::Length(SPACING),
            Constraint::Length(MESSAGE_HEIGHT),
            Constraint::Length(SPACING),
            Constraint::Length(ICON_ROW_HEIGHT),
            Constraint::Length(SPACING),
            Constraint::Max(cards_height),
        ])
        .flex(Flex::Center)
        .areas(content_column);

        let icons = Self::icon_slots(icon_row, direction);
        let cards = Self::card_slots(cards_area, columns, direction);

        LayoutAreas {
            language_buttons,
            header,
            title,
            message,
            icons,
            cards,
            command_bar,
            backdrop: area,
            warning: Rect::default(),
        }
    }

    /// 우측 상단 언어 버튼 4개 (RTL이면 순서 반전)
    fn button_slots(top_bar: Rect, direction: TextDirection) -> Vec<Rect> {
        let total = 4 * BUTTON_WIDTH + 3 * BUTTON_GAP;
        let right_margin = 2;
        let start_x = (top_bar.x + top_bar.width).saturating_sub(total + right_margin);
        let mut slots: Vec<Rect> = (0..4)
            .map(|i| Rect {
                x: start_x + i * (BUTTON_WIDTH + BUTTON_GAP),
                y: top_bar.y,
                width: BUTTON_WIDTH,
                height: 1,
            })
            .map(|rect| rect.intersection(top_bar))
            .collect();
        if direction.is_rtl() {
            slots.reverse();
        }
        slots
    }

    /// 가운데 정렬된 아이콘 3칸
    fn icon_slots(row: Rect, direction: TextDirection) -> Vec<Rect> {
        let mut slots: Vec<Rect> = Layout::horizontal([Constraint::Length(ICON_SLOT_WIDTH); 3])
            .flex(Flex::Center)
            .spacing(ICON_GAP)
            .split(row)
            .to_vec();
        if direction.is_rtl() {
            slots.reverse();
        }
        slots
    }

    /// 카드 그리드 (행 우선, RTL이면 각 행을 오른쪽부터 채움)
    fn card_slots(area: Rect, columns: u16, direction: TextDirection) -> Vec<Rect> {
        let rows = 4u16.div_ceil(columns);
        let row_areas = Layout::vertical(vec![Constraint::Length(CARD_HEIGHT); rows as usize])
            .split(area);

        let mut slots = Vec::with_capacity(4);
        for row_area in row_areas.iter() {
            let mut cells = Layout::horizontal(vec![
                Constraint::Ratio(1, u32::from(columns));
                columns as usize
            ])
            .spacing(CARD_GAP)
            .split(*row_area)
            .to_vec();
            if direction.is_rtl() {
                cells.reverse();
            }
            slots.extend(cells);
        }
        slots.truncate(4);
        slots
    }

    /// 현재 레이아웃 모드 반환
    pub fn mode(&self) -> LayoutMode {
        self.state.mode
    }

    /// 레이아웃 영역 반환
    pub fn areas(&self) -> &LayoutAreas {
        &self.state.areas
    }

    /// 터미널 크기 반환
    pub fn terminal_size(&self) -> (u16, u16) {
        self.state.terminal_size
    }
}

/// 좌표가 영역 안에 있는지
pub fn hit(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn laid_out(width: u16, height: u16, direction: TextDirection) -> LayoutManager {
        let mut manager = LayoutManager::new();
        manager.update(Rect::new(0, 0, width, height), direction);
        manager
    }

    #[test]
    fn test_determine_mode() {
        assert_eq!(
            LayoutManager::determine_mode(120, 30),
            LayoutMode::Card { columns: 4 }
        );
        assert_eq!(
            LayoutManager::determine_mode(99, 30),
            LayoutMode::Card { columns: 2 }
        );
        assert_eq!(
            LayoutManager::determine_mode(59, 30),
            LayoutMode::Card { columns: 1 }
        );
        assert_eq!(LayoutManager::determine_mode(39, 30), LayoutMode::TooSmall);
        assert_eq!(LayoutManager::determine_mode(120, 19), LayoutMode::TooSmall);
    }

    #[test]
    fn test_too_small_uses_whole_area_for_warning() {
        let manager = laid_out(30, 10, TextDirection::Ltr);
        assert_eq!(manager.mode(), LayoutMode::TooSmall);
        assert_eq!(manager.areas().warning, Rect::new(0, 0, 30, 10));
        assert!(manager.areas().cards.is_empty());
    }

    #[test]
    fn test_wide_layout_has_all_slots() {
        let manager = laid_out(120, 30, TextDirection::Ltr);
        let areas = manager.areas();
        assert_eq!(areas.language_buttons.len(), 4);
        assert_eq!(areas.icons.len(), 3);
        assert_eq!(areas.cards.len(), 4);
        // 4열: 모든 카드가 같은 행
        assert!(areas.cards.iter().all(|c| c.y == areas.cards[0].y));
        assert!(areas.cards.windows(2).all(|w| w[0].x < w[1].x));
        assert_eq!(areas.command_bar.y, 29);
    }

    #[test]
    fn test_rtl_mirrors_order() {
        let ltr = laid_out(120, 30, TextDirection::Ltr);
        let rtl = laid_out(120, 30, TextDirection::Rtl);

        let mut mirrored = ltr.areas().cards.clone();
        mirrored.reverse();
        assert_eq!(rtl.areas().cards, mirrored);

        assert!(rtl.areas().language_buttons[0].x > rtl.areas().language_buttons[3].x);
        assert!(rtl.areas().icons[0].x > rtl.areas().icons[2].x);
    }

    #[test]
    fn test_two_column_grid() {
        let manager = laid_out(80, 36, TextDirection::Ltr);
        let cards = &manager.areas().cards;
        assert_eq!(cards.len(), 4);
        assert_eq!(cards[0].y, cards[1].y);
        assert!(cards[2].y > cards[0].y);
    }

    #[test]
    fn test_buttons_are_top_right() {
        let manager = laid_out(120, 30, TextDirection::Ltr);
        let last = manager.areas().language_buttons[3];
        assert_eq!(last.y, 0);
        assert_eq!(last.x + last.width, 118);
    }

    #[test]
    fn test_hit() {
        let rect = Rect::new(10, 5, 4, 2);
        assert!(hit(rect, 10, 5));
        assert!(hit(rect, 13, 6));
        assert!(!hit(rect, 14, 5));
        assert!(!hit(rect, 10, 7));
    }
}
