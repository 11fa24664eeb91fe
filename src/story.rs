// The narrative is compiled in: one string per page, in reading order.
// Backgrounds are expected as background1.png (shared by menu and end
// screens) through background{PAGES.len() + 1}.png, one per story page.

pub const TITLE: &str = "Animated Storybook";
pub const HEADING: &str = "The Lion King";

pub const PAGES: &[&str] = &[
    "The story opens with the birth of Simba, son of King Mufasa and Queen Sarabi.",
    "All the animals of the Pride Lands gather to witness the presentation of the future king.",
    "Rafiki, a wise mandrill shaman, presents the newborn cub to the assembled animals.",
    "As Simba grows, Mufasa teaches him about the responsibilities of being a king and the delicate balance of nature, which he calls the 'Circle of Life'.",
    "Meanwhile, Mufasa's younger brother, Scar, grows increasingly jealous and resentful of Simba, as the cub's birth has displaced him as heir to the throne.",
    "One day, Scar tricks Simba and his best friend Nala into visiting a forbidden elephant graveyard.",
    "There, they're attacked by three hyenas - Shenzi, Banzai, and Ed - who are in league with Scar.",
    "Mufasa rescues the cubs, disappointing Scar's attempt to have Simba killed.",
    "Undeterred, Scar devises a new plan. He lures Simba into a gorge and signals the hyenas to start a wildebeest stampede.",
    "Mufasa arrives to save Simba but is betrayed by Scar, who throws him off a cliff into the stampede. Simba witnesses his father's death but doesn't see Scar's role in it.",
    "Scar convinces the traumatized Simba that the king's death was Simba's fault and tells him to run away and never return.",
    "As Simba flees, Scar orders the hyenas to kill him, but Simba escapes. Scar then returns to Pride Rock and claims the throne, allowing the hyenas to enter the Pride Lands.",
    "Simba collapses in the desert but is rescued by Timon (a meerkat) and Pumbaa (a warthog).",
    "They take him in, teaching him their carefree philosophy of 'Hakuna Matata' (No Worries). Simba grows into adulthood living a carefree life with his new friends.",
    "Years later, Simba encounters Nala, who has left the Pride Lands searching for help. She informs Simba of Scar's tyrannical rule and the suffering of their pride. Simba, still guilty about his father's death, refuses to return.",
    "Rafiki discovers that Simba is alive and finds him, showing him that Mufasa's spirit lives on.",
    "Mufasa's ghost appears to Simba, urging him to take his rightful place as king. Inspired, Simba decides to return to the Pride Lands.",
    "Simba, with help from Nala, Timon, and Pumbaa, returns home and confronts Scar. Scar tries to blame the hyenas for Mufasa's death, but Simba forces him to admit the truth to the pride.",
    "A battle ensues, ending with Simba defeating Scar, who is then killed by the hyenas he betrayed.",
    "With Scar's defeat, Simba takes his place as the rightful king.",
    "The story ends as it began, with Rafiki presenting Simba and Nala's newborn cub to the assembled animals of the Pride Lands, continuing the Circle of Life.",
];

/// Number of background images the asset directory is expected to hold:
/// one shared menu/end image plus one per page.
pub fn background_count() -> usize {
    PAGES.len() + 1
}
