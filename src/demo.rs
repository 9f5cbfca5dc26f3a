/// Sample problem: ten of these values summing to 50.
pub const VALUES: [i64; 100] = [
    -50, -48, -47, -45, -42, -40, -38, -36, -34, -32,
    -30, -28, -27, -25, -23, -22, -21, -19, -18, -17,
    -15, -14, -12, -10, -9, -8, -6, -5, -4, -3,
    -2, -1, 0, 1, 2, 3, 4, 5, 6, 7,
    8, 9, 10, 12, 14, 15, 17, 18, 19, 20,
    21, 22, 23, 25, 26, 27, 28, 29, 30, 31,
    32, 33, 34, 35, 36, 37, 38, 39, 40, 41,
    42, 43, 44, 45, 46, 47, 48, 49, 50, -37,
    -29, -26, -24, -20, -16, -13, -11, -7, 11, 13,
    16, 24, 37, -46, -39, -33, -31, -41, 46, 19,
];

pub const TARGET: i64 = 50;

pub const COUNT: usize = 10;
