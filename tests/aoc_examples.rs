use aoc25::days::{run, Options, Part, PuzzleError};

fn both(day: u8, input: &str, options: &Options) -> (String, String) {
    let lines = input.lines().collect::<Vec<_>>();
    (
        run(day, Part::One, &lines, options).unwrap(),
        run(day, Part::Two, &lines, options).unwrap(),
    )
}

fn answers(one: &str, two: &str) -> (String, String) {
    (one.to_string(), two.to_string())
}

#[test]
fn aoc_day01() {
    let input = "L68\nL30\nR48\nL5\nR60\nL55\nL1\nL99\nR14\nL82";

    assert_eq!(both(1, input, &Options::default()), answers("3", "6"));
}

#[test]
fn aoc_day02() {
    let input = "11-22,95-115,998-1012,1188511880-1188511890,222220-222224,\
1698522-1698528,446443-446449,38593856-38593862,565653-565659,\
824824821-824824827,2121212118-2121212124";

    assert_eq!(
        both(2, input, &Options::default()),
        answers("1227775554", "4174379265")
    );
}

#[test]
fn aoc_day03() {
    let input = r#"987654321111111
811111111111119
234234234234278
818181911112111"#;

    assert_eq!(
        both(3, input, &Options::default()),
        answers("357", "3121910778619")
    );
}

#[test]
fn aoc_day04() {
    let input = r#"..@@.@@@@.
@@@.@@@.@@
@@@@@.@.@@
@.@@@@..@.
@@.@@@@.@@
.@@@@@@@.@
.@.@.@.@@@
@.@@@.@@@@
.@@@@@@@@.
@.@.@@@.@."#;

    assert_eq!(both(4, input, &Options::default()), answers("11", "44"));
}

#[test]
fn aoc_day05() {
    let input = r#"3-5
10-14
16-20
12-18

1
5
8
11
17
32"#;

    assert_eq!(both(5, input, &Options::default()), answers("3", "14"));
}

#[test]
fn aoc_day06() {
    // trailing spaces matter here, so no raw string
    let lines = [
        "123 328  51 64 ",
        " 45 64  387 23 ",
        "  6 98  215 314",
        "*   +   *   +  ",
    ];

    assert_eq!(
        both(6, &lines.join("\n"), &Options::default()),
        answers("4277556", "3263827")
    );
}

#[test]
fn aoc_day07() {
    let input = r#".......S.......
...............
.......^.......
...............
......^.^......
...............
.....^.^.^.....
...............
....^.^...^....
...............
...^.^...^.^...
...............
..^...^.....^..
...............
.^.^.^.^.^...^.
..............."#;

    assert_eq!(both(7, input, &Options::default()), answers("21", "40"));
}

#[test]
fn aoc_day08() {
    let input = r#"162,817,812
57,618,57
906,360,560
592,479,940
352,342,300
466,668,158
542,29,236
431,825,988
739,650,466
52,470,668
216,146,977
819,987,18
117,168,530
805,96,715
346,949,466
970,615,88
941,993,340
862,61,35
984,92,344
425,690,689"#;

    assert_eq!(
        both(8, input, &Options { connections: 10 }),
        answers("40", "25272")
    );
}

#[test]
fn aoc_day09() {
    let input = r#"7,1
11,1
11,7
9,7
9,5
2,5
2,3
7,3"#;

    assert_eq!(both(9, input, &Options::default()), answers("50", "24"));
}

#[test]
fn unknown_day_and_empty_input() {
    let options = Options::default();

    assert!(matches!(
        run(12, Part::One, &["1"], &options),
        Err(PuzzleError::UnknownDay(12))
    ));
    assert!(matches!(
        run(1, Part::One, &["", "  "], &options),
        Err(PuzzleError::NoData)
    ));
}
