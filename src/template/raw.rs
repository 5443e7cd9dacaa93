//! Hand-authored reference shapes, in unit-box coordinates.
//!
//! Each digit owns one or more stroke-order variants. Coordinates are `(x, y)`
//! with `y` growing downwards; the shapes are resampled and normalized when the
//! library is compiled, so only the path matters, not the spacing.

type Shape = &'static [(f32, f32)];

pub(crate) const RAW_TEMPLATES: [&[Shape]; 10] = [
    // 0: closed loop from the top.
    &[&[(0.5, 0.0), (1.0, 0.5), (0.5, 1.0), (0.0, 0.5), (0.5, 0.0)]],
    // 1: stick, hooked stick.
    &[
        &[(0.5, 0.0), (0.5, 1.0)],
        &[(0.4, 0.0), (0.5, 0.0), (0.5, 1.0)],
    ],
    // 2: standard, loopy base.
    &[
        &[(0.0, 0.2), (0.5, 0.0), (1.0, 0.2), (1.0, 0.4), (0.0, 1.0), (1.0, 1.0)],
        &[(0.1, 0.3), (0.5, 0.0), (0.9, 0.3), (0.2, 0.9), (1.0, 0.9)],
    ],
    // 3
    &[&[
        (0.1, 0.2),
        (0.5, 0.0),
        (0.9, 0.2),
        (0.5, 0.5),
        (0.9, 0.8),
        (0.5, 1.0),
        (0.1, 0.8),
    ]],
    // 4: standard, open top, L-shape.
    &[
        &[(0.8, 1.0), (0.8, 0.0), (0.0, 0.6), (1.0, 0.6)],
        &[(0.7, 1.0), (0.7, 0.0), (0.0, 0.5), (0.7, 0.5)],
        &[(1.0, 1.0), (1.0, 0.0), (0.0, 0.7), (1.0, 0.7)],
    ],
    // 5: standard, S-like.
    &[
        &[(1.0, 0.0), (0.0, 0.0), (0.0, 0.4), (1.0, 0.6), (0.5, 1.0), (0.0, 0.9)],
        &[(0.9, 0.0), (0.2, 0.0), (0.2, 0.4), (1.0, 0.7), (0.1, 0.9)],
    ],
    // 6: spiral, straight back, big loop.
    &[
        &[(0.8, 0.0), (0.1, 0.4), (0.1, 0.9), (0.9, 0.9), (0.9, 0.5), (0.2, 0.5)],
        &[(0.7, 0.0), (0.2, 0.8), (0.5, 1.0), (0.9, 0.8), (0.7, 0.6), (0.3, 0.7)],
        &[(0.5, 0.0), (0.0, 0.5), (0.2, 0.9), (0.8, 0.9), (0.8, 0.6), (0.2, 0.6)],
    ],
    // 7: plain, lowered bar, serif.
    &[
        &[(0.0, 0.0), (1.0, 0.0), (0.4, 1.0)],
        &[(0.0, 0.15), (1.0, 0.15), (0.5, 1.0)],
        &[(0.0, 0.2), (0.1, 0.0), (1.0, 0.0), (0.5, 1.0)],
    ],
    // 8: cross, reverse cross, stacked loops. All start at the pinch.
    &[
        &[
            (0.5, 0.5),
            (0.9, 0.2),
            (0.5, 0.0),
            (0.1, 0.2),
            (0.5, 0.5),
            (0.9, 0.8),
            (0.5, 1.0),
            (0.1, 0.8),
            (0.5, 0.5),
        ],
        &[
            (0.5, 0.5),
            (0.1, 0.2),
            (0.5, 0.0),
            (0.9, 0.2),
            (0.5, 0.5),
            (0.1, 0.8),
            (0.5, 1.0),
            (0.9, 0.8),
            (0.5, 0.5),
        ],
        &[
            (0.5, 0.5),
            (1.0, 0.25),
            (0.5, 0.0),
            (0.0, 0.25),
            (0.5, 0.5),
            (1.0, 0.75),
            (0.5, 1.0),
            (0.0, 0.75),
            (0.5, 0.5),
        ],
    ],
    // 9: stick tail, slanted tail, curly tail.
    &[
        &[(1.0, 0.5), (0.5, 0.0), (0.0, 0.5), (1.0, 0.5), (1.0, 1.0)],
        &[(1.0, 0.5), (0.5, 0.0), (0.0, 0.5), (1.0, 0.5), (0.8, 1.0)],
        &[(1.0, 0.6), (0.5, 0.2), (0.0, 0.6), (1.0, 0.6), (0.5, 1.0), (0.1, 0.9)],
    ],
];
