use checkers_engine::{utils::replay, Board, Cell, Color, Game, Rank};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const KINGING_GAME: &str = "
Faris 5,2 4,1
Sam 2,3 3,2
Faris 4,1 2,3
Sam 1,2 3,4
Faris 5,4 4,5
Sam 0,1 1,2
Faris 4,5 2,3
Faris 2,3 0,1
Sam 2,7 3,6
Faris 6,3 5,2
Sam 2,5 3,4
Faris 0,1 4,5
Sam 3,6 5,4
";

fn new_game() -> Game {
    let mut game = Game::default();
    game.create_player("Sam", Color::White);
    game.create_player("Faris", Color::Black);
    game
}

fn iter_piece_count(board: &Board) -> usize {
    board.iter().filter(|cell| !cell.is_empty()).count()
}

fn for_piece_count(board: &Board) -> usize {
    let mut result = 0;
    for row in board.inside() {
        for cell in row {
            if let Cell::Piece(_) = cell {
                result += 1;
            }
        }
    }
    result
}

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("iter piece count", |b| {
        b.iter(|| iter_piece_count(black_box(&Board::default())))
    });
    c.bench_function("for piece count", |b| {
        b.iter(|| for_piece_count(black_box(&Board::default())))
    });
    c.bench_function("rank count", |b| {
        b.iter(|| black_box(&Board::default()).count(Color::Black, Rank::Man))
    });
    c.bench_function("render board", |b| {
        b.iter(|| black_box(&Board::default()).to_string())
    });
    c.bench_function("replay kinging game", |b| {
        b.iter(|| {
            let mut game = new_game();
            replay(&mut game, black_box(KINGING_GAME)).map(|stats| stats.captures)
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
