// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The 256 xterm palette rows.
//!
//! More info:
//! - <https://www.ditig.com/256-colors-cheat-sheet>
//! - <https://commons.wikimedia.org/wiki/File:Xterm_256color_chart.svg>

use super::PaletteEntry;

const fn entry(
    id: u8,
    name: &'static str,
    hex: &'static str,
    rgb: (u8, u8, u8),
    hsl: (u16, u8, u8),
) -> PaletteEntry {
    PaletteEntry {
        id,
        name,
        hex,
        rgb,
        hsl,
    }
}

/// Row `i` describes color id `i`. Ids 0-15 are the system colors, 16-231 the 6x6x6
/// cube, 232-255 the grayscale ramp.
#[rustfmt::skip]
pub const PALETTE: [PaletteEntry; 256] = [
    entry(0, "black", "#000000", (0, 0, 0), (0, 0, 0)),
    entry(1, "maroon", "#800000", (128, 0, 0), (0, 100, 25)),
    entry(2, "green", "#008000", (0, 128, 0), (120, 100, 25)),
    entry(3, "olive", "#808000", (128, 128, 0), (60, 100, 25)),
    entry(4, "navy", "#000080", (0, 0, 128), (240, 100, 25)),
    entry(5, "purple", "#800080", (128, 0, 128), (300, 100, 25)),
    entry(6, "teal", "#008080", (0, 128, 128), (180, 100, 25)),
    entry(7, "silver", "#c0c0c0", (192, 192, 192), (0, 0, 75)),
    entry(8, "grey", "#808080", (128, 128, 128), (0, 0, 50)),
    entry(9, "red", "#ff0000", (255, 0, 0), (0, 100, 50)),
    entry(10, "lime", "#00ff00", (0, 255, 0), (120, 100, 50)),
    entry(11, "yellow", "#ffff00", (255, 255, 0), (60, 100, 50)),
    entry(12, "blue", "#0000ff", (0, 0, 255), (240, 100, 50)),
    entry(13, "fuchsia", "#ff00ff", (255, 0, 255), (300, 100, 50)),
    entry(14, "aqua", "#00ffff", (0, 255, 255), (180, 100, 50)),
    entry(15, "white", "#ffffff", (255, 255, 255), (0, 0, 100)),
    entry(16, "grey0", "#000000", (0, 0, 0), (0, 0, 0)),
    entry(17, "navyblue", "#00005f", (0, 0, 95), (240, 100, 18)),
    entry(18, "darkblue", "#000087", (0, 0, 135), (240, 100, 26)),
    entry(19, "blue3", "#0000af", (0, 0, 175), (240, 100, 34)),
    entry(20, "blue4", "#0000d7", (0, 0, 215), (240, 100, 42)),
    entry(21, "blue1", "#0000ff", (0, 0, 255), (240, 100, 50)),
    entry(22, "darkgreen", "#005f00", (0, 95, 0), (120, 100, 18)),
    entry(23, "deepskyblue4", "#005f5f", (0, 95, 95), (180, 100, 18)),
    entry(24, "deepskyblue5", "#005f87", (0, 95, 135), (197, 100, 26)),
    entry(25, "deepskyblue6", "#005faf", (0, 95, 175), (207, 100, 34)),
    entry(26, "dodgerblue3", "#005fd7", (0, 95, 215), (213, 100, 42)),
    entry(27, "dodgerblue2", "#005fff", (0, 95, 255), (217, 100, 50)),
    entry(28, "green4", "#008700", (0, 135, 0), (120, 100, 26)),
    entry(29, "springgreen4", "#00875f", (0, 135, 95), (162, 100, 26)),
    entry(30, "turquoise4", "#008787", (0, 135, 135), (180, 100, 26)),
    entry(31, "deepskyblue3", "#0087af", (0, 135, 175), (193, 100, 34)),
    entry(32, "deepskyblue7", "#0087d7", (0, 135, 215), (202, 100, 42)),
    entry(33, "dodgerblue1", "#0087ff", (0, 135, 255), (208, 100, 50)),
    entry(34, "green3", "#00af00", (0, 175, 0), (120, 100, 34)),
    entry(35, "springgreen3", "#00af5f", (0, 175, 95), (152, 100, 34)),
    entry(36, "darkcyan", "#00af87", (0, 175, 135), (166, 100, 34)),
    entry(37, "lightseagreen", "#00afaf", (0, 175, 175), (180, 100, 34)),
    entry(38, "deepskyblue2", "#00afd7", (0, 175, 215), (191, 100, 42)),
    entry(39, "deepskyblue1", "#00afff", (0, 175, 255), (198, 100, 50)),
    entry(40, "green5", "#00d700", (0, 215, 0), (120, 100, 42)),
    entry(41, "springgreen5", "#00d75f", (0, 215, 95), (146, 100, 42)),
    entry(42, "springgreen2", "#00d787", (0, 215, 135), (157, 100, 42)),
    entry(43, "cyan3", "#00d7af", (0, 215, 175), (168, 100, 42)),
    entry(44, "darkturquoise", "#00d7d7", (0, 215, 215), (180, 100, 42)),
    entry(45, "turquoise2", "#00d7ff", (0, 215, 255), (189, 100, 50)),
    entry(46, "green1", "#00ff00", (0, 255, 0), (120, 100, 50)),
    entry(47, "springgreen6", "#00ff5f", (0, 255, 95), (142, 100, 50)),
    entry(48, "springgreen1", "#00ff87", (0, 255, 135), (151, 100, 50)),
    entry(49, "mediumspringgreen", "#00ffaf", (0, 255, 175), (161, 100, 50)),
    entry(50, "cyan2", "#00ffd7", (0, 255, 215), (170, 100, 50)),
    entry(51, "cyan1", "#00ffff", (0, 255, 255), (180, 100, 50)),
    entry(52, "darkred", "#5f0000", (95, 0, 0), (0, 100, 18)),
    entry(53, "deeppink4", "#5f005f", (95, 0, 95), (300, 100, 18)),
    entry(54, "purple4", "#5f0087", (95, 0, 135), (282, 100, 26)),
    entry(55, "purple5", "#5f00af", (95, 0, 175), (272, 100, 34)),
    entry(56, "purple3", "#5f00d7", (95, 0, 215), (266, 100, 42)),
    entry(57, "blueviolet", "#5f00ff", (95, 0, 255), (262, 100, 50)),
    entry(58, "orange4", "#5f5f00", (95, 95, 0), (60, 100, 18)),
    entry(59, "grey37", "#5f5f5f", (95, 95, 95), (0, 0, 37)),
    entry(60, "mediumpurple4", "#5f5f87", (95, 95, 135), (240, 17, 45)),
    entry(61, "slateblue3", "#5f5faf", (95, 95, 175), (240, 33, 52)),
    entry(62, "slateblue4", "#5f5fd7", (95, 95, 215), (240, 60, 60)),
    entry(63, "royalblue1", "#5f5fff", (95, 95, 255), (240, 100, 68)),
    entry(64, "chartreuse4", "#5f8700", (95, 135, 0), (77, 100, 26)),
    entry(65, "darkseagreen4", "#5f875f", (95, 135, 95), (120, 17, 45)),
    entry(66, "paleturquoise4", "#5f8787", (95, 135, 135), (180, 17, 45)),
    entry(67, "steelblue", "#5f87af", (95, 135, 175), (210, 33, 52)),
    entry(68, "steelblue3", "#5f87d7", (95, 135, 215), (220, 60, 60)),
    entry(69, "cornflowerblue", "#5f87ff", (95, 135, 255), (225, 100, 68)),
    entry(70, "chartreuse3", "#5faf00", (95, 175, 0), (87, 100, 34)),
    entry(71, "darkseagreen5", "#5faf5f", (95, 175, 95), (120, 33, 52)),
    entry(72, "cadetblue", "#5faf87", (95, 175, 135), (150, 33, 52)),
    entry(73, "cadetblue0", "#5fafaf", (95, 175, 175), (180, 33, 52)),
    entry(74, "skyblue3", "#5fafd7", (95, 175, 215), (200, 60, 60)),
    entry(75, "steelblue1", "#5fafff", (95, 175, 255), (210, 100, 68)),
    entry(76, "chartreuse5", "#5fd700", (95, 215, 0), (93, 100, 42)),
    entry(77, "palegreen3", "#5fd75f", (95, 215, 95), (120, 60, 60)),
    entry(78, "seagreen3", "#5fd787", (95, 215, 135), (140, 60, 60)),
    entry(79, "aquamarine3", "#5fd7af", (95, 215, 175), (160, 60, 60)),
    entry(80, "mediumturquoise", "#5fd7d7", (95, 215, 215), (180, 60, 60)),
    entry(81, "steelblue2", "#5fd7ff", (95, 215, 255), (195, 100, 68)),
    entry(82, "chartreuse2", "#5fff00", (95, 255, 0), (97, 100, 50)),
    entry(83, "seagreen2", "#5fff5f", (95, 255, 95), (120, 100, 68)),
    entry(84, "seagreen1", "#5fff87", (95, 255, 135), (135, 100, 68)),
    entry(85, "seagreen4", "#5fffaf", (95, 255, 175), (150, 100, 68)),
    entry(86, "aquamarine1", "#5fffd7", (95, 255, 215), (165, 100, 68)),
    entry(87, "darkslategray2", "#5fffff", (95, 255, 255), (180, 100, 68)),
    entry(88, "darkred0", "#870000", (135, 0, 0), (0, 100, 26)),
    entry(89, "deeppink5", "#87005f", (135, 0, 95), (317, 100, 26)),
    entry(90, "darkmagenta", "#870087", (135, 0, 135), (300, 100, 26)),
    entry(91, "darkmagenta0", "#8700af", (135, 0, 175), (286, 100, 34)),
    entry(92, "darkviolet", "#8700d7", (135, 0, 215), (277, 100, 42)),
    entry(93, "purple0", "#8700ff", (135, 0, 255), (271, 100, 50)),
    entry(94, "orange5", "#875f00", (135, 95, 0), (42, 100, 26)),
    entry(95, "lightpink4", "#875f5f", (135, 95, 95), (0, 17, 45)),
    entry(96, "plum4", "#875f87", (135, 95, 135), (300, 17, 45)),
    entry(97, "mediumpurple3", "#875faf", (135, 95, 175), (270, 33, 52)),
    entry(98, "mediumpurple5", "#875fd7", (135, 95, 215), (260, 60, 60)),
    entry(99, "slateblue1", "#875fff", (135, 95, 255), (255, 100, 68)),
    entry(100, "yellow4", "#878700", (135, 135, 0), (60, 100, 26)),
    entry(101, "wheat4", "#87875f", (135, 135, 95), (60, 17, 45)),
    entry(102, "grey53", "#878787", (135, 135, 135), (0, 0, 52)),
    entry(103, "lightslategrey", "#8787af", (135, 135, 175), (240, 20, 60)),
    entry(104, "mediumpurple", "#8787d7", (135, 135, 215), (240, 50, 68)),
    entry(105, "lightslateblue", "#8787ff", (135, 135, 255), (240, 100, 76)),
    entry(106, "yellow5", "#87af00", (135, 175, 0), (73, 100, 34)),
    entry(107, "darkolivegreen3", "#87af5f", (135, 175, 95), (90, 33, 52)),
    entry(108, "darkseagreen", "#87af87", (135, 175, 135), (120, 20, 60)),
    entry(109, "lightskyblue3", "#87afaf", (135, 175, 175), (180, 20, 60)),
    entry(110, "lightskyblue4", "#87afd7", (135, 175, 215), (210, 50, 68)),
    entry(111, "skyblue2", "#87afff", (135, 175, 255), (220, 100, 76)),
    entry(112, "chartreuse6", "#87d700", (135, 215, 0), (82, 100, 42)),
    entry(113, "darkolivegreen4", "#87d75f", (135, 215, 95), (100, 60, 60)),
    entry(114, "palegreen4", "#87d787", (135, 215, 135), (120, 50, 68)),
    entry(115, "darkseagreen3", "#87d7af", (135, 215, 175), (150, 50, 68)),
    entry(116, "darkslategray3", "#87d7d7", (135, 215, 215), (180, 50, 68)),
    entry(117, "skyblue1", "#87d7ff", (135, 215, 255), (200, 100, 76)),
    entry(118, "chartreuse1", "#87ff00", (135, 255, 0), (88, 100, 50)),
    entry(119, "lightgreen", "#87ff5f", (135, 255, 95), (105, 100, 68)),
    entry(120, "lightgreen0", "#87ff87", (135, 255, 135), (120, 100, 76)),
    entry(121, "palegreen1", "#87ffaf", (135, 255, 175), (140, 100, 76)),
    entry(122, "aquamarine2", "#87ffd7", (135, 255, 215), (160, 100, 76)),
    entry(123, "darkslategray1", "#87ffff", (135, 255, 255), (180, 100, 76)),
    entry(124, "red3", "#af0000", (175, 0, 0), (0, 100, 34)),
    entry(125, "deeppink6", "#af005f", (175, 0, 95), (327, 100, 34)),
    entry(126, "mediumvioletred", "#af0087", (175, 0, 135), (313, 100, 34)),
    entry(127, "magenta3", "#af00af", (175, 0, 175), (300, 100, 34)),
    entry(128, "darkviolet0", "#af00d7", (175, 0, 215), (288, 100, 42)),
    entry(129, "purple1", "#af00ff", (175, 0, 255), (281, 100, 50)),
    entry(130, "darkorange3", "#af5f00", (175, 95, 0), (32, 100, 34)),
    entry(131, "indianred", "#af5f5f", (175, 95, 95), (0, 33, 52)),
    entry(132, "hotpink3", "#af5f87", (175, 95, 135), (330, 33, 52)),
    entry(133, "mediumorchid3", "#af5faf", (175, 95, 175), (300, 33, 52)),
    entry(134, "mediumorchid", "#af5fd7", (175, 95, 215), (280, 60, 60)),
    entry(135, "mediumpurple2", "#af5fff", (175, 95, 255), (270, 100, 68)),
    entry(136, "darkgoldenrod", "#af8700", (175, 135, 0), (46, 100, 34)),
    entry(137, "lightsalmon3", "#af875f", (175, 135, 95), (30, 33, 52)),
    entry(138, "rosybrown", "#af8787", (175, 135, 135), (0, 20, 60)),
    entry(139, "grey63", "#af87af", (175, 135, 175), (300, 20, 60)),
    entry(140, "mediumpurple6", "#af87d7", (175, 135, 215), (270, 50, 68)),
    entry(141, "mediumpurple1", "#af87ff", (175, 135, 255), (260, 100, 76)),
    entry(142, "gold3", "#afaf00", (175, 175, 0), (60, 100, 34)),
    entry(143, "darkkhaki", "#afaf5f", (175, 175, 95), (60, 33, 52)),
    entry(144, "navajowhite3", "#afaf87", (175, 175, 135), (60, 20, 60)),
    entry(145, "grey69", "#afafaf", (175, 175, 175), (0, 0, 68)),
    entry(146, "lightsteelblue3", "#afafd7", (175, 175, 215), (240, 33, 76)),
    entry(147, "lightsteelblue", "#afafff", (175, 175, 255), (240, 100, 84)),
    entry(148, "yellow3", "#afd700", (175, 215, 0), (71, 100, 42)),
    entry(149, "darkolivegreen5", "#afd75f", (175, 215, 95), (80, 60, 60)),
    entry(150, "darkseagreen6", "#afd787", (175, 215, 135), (90, 50, 68)),
    entry(151, "darkseagreen2", "#afd7af", (175, 215, 175), (120, 33, 76)),
    entry(152, "lightcyan3", "#afd7d7", (175, 215, 215), (180, 33, 76)),
    entry(153, "lightskyblue1", "#afd7ff", (175, 215, 255), (210, 100, 84)),
    entry(154, "greenyellow", "#afff00", (175, 255, 0), (78, 100, 50)),
    entry(155, "darkolivegreen2", "#afff5f", (175, 255, 95), (90, 100, 68)),
    entry(156, "palegreen2", "#afff87", (175, 255, 135), (100, 100, 76)),
    entry(157, "darkseagreen7", "#afffaf", (175, 255, 175), (120, 100, 84)),
    entry(158, "darkseagreen1", "#afffd7", (175, 255, 215), (150, 100, 84)),
    entry(159, "paleturquoise1", "#afffff", (175, 255, 255), (180, 100, 84)),
    entry(160, "red4", "#d70000", (215, 0, 0), (0, 100, 42)),
    entry(161, "deeppink3", "#d7005f", (215, 0, 95), (333, 100, 42)),
    entry(162, "deeppink7", "#d70087", (215, 0, 135), (322, 100, 42)),
    entry(163, "magenta4", "#d700af", (215, 0, 175), (311, 100, 42)),
    entry(164, "magenta5", "#d700d7", (215, 0, 215), (300, 100, 42)),
    entry(165, "magenta2", "#d700ff", (215, 0, 255), (290, 100, 50)),
    entry(166, "darkorange4", "#d75f00", (215, 95, 0), (26, 100, 42)),
    entry(167, "indianred0", "#d75f5f", (215, 95, 95), (0, 60, 60)),
    entry(168, "hotpink4", "#d75f87", (215, 95, 135), (340, 60, 60)),
    entry(169, "hotpink2", "#d75faf", (215, 95, 175), (320, 60, 60)),
    entry(170, "orchid", "#d75fd7", (215, 95, 215), (300, 60, 60)),
    entry(171, "mediumorchid1", "#d75fff", (215, 95, 255), (285, 100, 68)),
    entry(172, "orange3", "#d78700", (215, 135, 0), (37, 100, 42)),
    entry(173, "lightsalmon4", "#d7875f", (215, 135, 95), (20, 60, 60)),
    entry(174, "lightpink3", "#d78787", (215, 135, 135), (0, 50, 68)),
    entry(175, "pink3", "#d787af", (215, 135, 175), (330, 50, 68)),
    entry(176, "plum3", "#d787d7", (215, 135, 215), (300, 50, 68)),
    entry(177, "violet", "#d787ff", (215, 135, 255), (280, 100, 76)),
    entry(178, "gold4", "#d7af00", (215, 175, 0), (48, 100, 42)),
    entry(179, "lightgoldenrod3", "#d7af5f", (215, 175, 95), (40, 60, 60)),
    entry(180, "tan", "#d7af87", (215, 175, 135), (30, 50, 68)),
    entry(181, "mistyrose3", "#d7afaf", (215, 175, 175), (0, 33, 76)),
    entry(182, "thistle3", "#d7afd7", (215, 175, 215), (300, 33, 76)),
    entry(183, "plum2", "#d7afff", (215, 175, 255), (270, 100, 84)),
    entry(184, "yellow6", "#d7d700", (215, 215, 0), (60, 100, 42)),
    entry(185, "khaki3", "#d7d75f", (215, 215, 95), (60, 60, 60)),
    entry(186, "lightgoldenrod2", "#d7d787", (215, 215, 135), (60, 50, 68)),
    entry(187, "lightyellow3", "#d7d7af", (215, 215, 175), (60, 33, 76)),
    entry(188, "grey84", "#d7d7d7", (215, 215, 215), (0, 0, 84)),
    entry(189, "lightsteelblue1", "#d7d7ff", (215, 215, 255), (240, 100, 92)),
    entry(190, "yellow2", "#d7ff00", (215, 255, 0), (69, 100, 50)),
    entry(191, "darkolivegreen1", "#d7ff5f", (215, 255, 95), (75, 100, 68)),
    entry(192, "darkolivegreen6", "#d7ff87", (215, 255, 135), (80, 100, 76)),
    entry(193, "darkseagreen8", "#d7ffaf", (215, 255, 175), (90, 100, 84)),
    entry(194, "honeydew2", "#d7ffd7", (215, 255, 215), (120, 100, 92)),
    entry(195, "lightcyan1", "#d7ffff", (215, 255, 255), (180, 100, 92)),
    entry(196, "red1", "#ff0000", (255, 0, 0), (0, 100, 50)),
    entry(197, "deeppink2", "#ff005f", (255, 0, 95), (337, 100, 50)),
    entry(198, "deeppink1", "#ff0087", (255, 0, 135), (328, 100, 50)),
    entry(199, "deeppink8", "#ff00af", (255, 0, 175), (318, 100, 50)),
    entry(200, "magenta6", "#ff00d7", (255, 0, 215), (309, 100, 50)),
    entry(201, "magenta1", "#ff00ff", (255, 0, 255), (300, 100, 50)),
    entry(202, "orangered1", "#ff5f00", (255, 95, 0), (22, 100, 50)),
    entry(203, "indianred1", "#ff5f5f", (255, 95, 95), (0, 100, 68)),
    entry(204, "indianred2", "#ff5f87", (255, 95, 135), (345, 100, 68)),
    entry(205, "hotpink", "#ff5faf", (255, 95, 175), (330, 100, 68)),
    entry(206, "hotpink0", "#ff5fd7", (255, 95, 215), (315, 100, 68)),
    entry(207, "mediumorchid2", "#ff5fff", (255, 95, 255), (300, 100, 68)),
    entry(208, "darkorange", "#ff8700", (255, 135, 0), (31, 100, 50)),
    entry(209, "salmon1", "#ff875f", (255, 135, 95), (15, 100, 68)),
    entry(210, "lightcoral", "#ff8787", (255, 135, 135), (0, 100, 76)),
    entry(211, "palevioletred1", "#ff87af", (255, 135, 175), (340, 100, 76)),
    entry(212, "orchid2", "#ff87d7", (255, 135, 215), (320, 100, 76)),
    entry(213, "orchid1", "#ff87ff", (255, 135, 255), (300, 100, 76)),
    entry(214, "orange1", "#ffaf00", (255, 175, 0), (41, 100, 50)),
    entry(215, "sandybrown", "#ffaf5f", (255, 175, 95), (30, 100, 68)),
    entry(216, "lightsalmon1", "#ffaf87", (255, 175, 135), (20, 100, 76)),
    entry(217, "lightpink1", "#ffafaf", (255, 175, 175), (0, 100, 84)),
    entry(218, "pink1", "#ffafd7", (255, 175, 215), (330, 100, 84)),
    entry(219, "plum1", "#ffafff", (255, 175, 255), (300, 100, 84)),
    entry(220, "gold1", "#ffd700", (255, 215, 0), (50, 100, 50)),
    entry(221, "lightgoldenrod4", "#ffd75f", (255, 215, 95), (45, 100, 68)),
    entry(222, "lightgoldenrod5", "#ffd787", (255, 215, 135), (40, 100, 76)),
    entry(223, "navajowhite1", "#ffd7af", (255, 215, 175), (30, 100, 84)),
    entry(224, "mistyrose1", "#ffd7d7", (255, 215, 215), (0, 100, 92)),
    entry(225, "thistle1", "#ffd7ff", (255, 215, 255), (300, 100, 92)),
    entry(226, "yellow1", "#ffff00", (255, 255, 0), (60, 100, 50)),
    entry(227, "lightgoldenrod1", "#ffff5f", (255, 255, 95), (60, 100, 68)),
    entry(228, "khaki1", "#ffff87", (255, 255, 135), (60, 100, 76)),
    entry(229, "wheat1", "#ffffaf", (255, 255, 175), (60, 100, 84)),
    entry(230, "cornsilk1", "#ffffd7", (255, 255, 215), (60, 100, 92)),
    entry(231, "grey100", "#ffffff", (255, 255, 255), (0, 0, 100)),
    entry(232, "grey3", "#080808", (8, 8, 8), (0, 0, 3)),
    entry(233, "grey7", "#121212", (18, 18, 18), (0, 0, 7)),
    entry(234, "grey11", "#1c1c1c", (28, 28, 28), (0, 0, 10)),
    entry(235, "grey15", "#262626", (38, 38, 38), (0, 0, 14)),
    entry(236, "grey19", "#303030", (48, 48, 48), (0, 0, 18)),
    entry(237, "grey23", "#3a3a3a", (58, 58, 58), (0, 0, 22)),
    entry(238, "grey27", "#444444", (68, 68, 68), (0, 0, 26)),
    entry(239, "grey30", "#4e4e4e", (78, 78, 78), (0, 0, 30)),
    entry(240, "grey35", "#585858", (88, 88, 88), (0, 0, 34)),
    entry(241, "grey39", "#626262", (98, 98, 98), (0, 0, 37)),
    entry(242, "grey42", "#6c6c6c", (108, 108, 108), (0, 0, 40)),
    entry(243, "grey46", "#767676", (118, 118, 118), (0, 0, 46)),
    entry(244, "grey50", "#808080", (128, 128, 128), (0, 0, 50)),
    entry(245, "grey54", "#8a8a8a", (138, 138, 138), (0, 0, 54)),
    entry(246, "grey58", "#949494", (148, 148, 148), (0, 0, 58)),
    entry(247, "grey62", "#9e9e9e", (158, 158, 158), (0, 0, 61)),
    entry(248, "grey66", "#a8a8a8", (168, 168, 168), (0, 0, 65)),
    entry(249, "grey70", "#b2b2b2", (178, 178, 178), (0, 0, 69)),
    entry(250, "grey74", "#bcbcbc", (188, 188, 188), (0, 0, 73)),
    entry(251, "grey78", "#c6c6c6", (198, 198, 198), (0, 0, 77)),
    entry(252, "grey82", "#d0d0d0", (208, 208, 208), (0, 0, 81)),
    entry(253, "grey85", "#dadada", (218, 218, 218), (0, 0, 85)),
    entry(254, "grey89", "#e4e4e4", (228, 228, 228), (0, 0, 89)),
    entry(255, "grey93", "#eeeeee", (238, 238, 238), (0, 0, 93)),
];
