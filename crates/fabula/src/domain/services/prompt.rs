//! Prompt Construction
//!
//! Pure string composition turning a character and an optional genre into a
//! complete generation instruction. There is no branching beyond the genre
//! selector, so identical inputs always yield byte-identical prompts.

use crate::domain::value_objects::Genre;

/// Build the general story prompt for a character.
///
/// Requests a 1000-1200 word story with a beginning/problem/middle/ending
/// structure and craft guidance on showing vs. telling, dialogue, and
/// emotional stakes.
pub fn general_prompt(name: &str, details: &str) -> String {
    format!(
        r#"
You are a great storyteller. Write an interesting short story about this character:

**Character Name:** {name}
**About the Character:** {details}

**What to include in your story:**

**Story Length:** Write about 1000-1200 words

**Story Parts:**
1. **Beginning:** Show us who the character is and where they are
2. **Problem:** Give the character something challenging to deal with
3. **Middle:** Show how the character tries to solve the problem
4. **Ending:** Show how things work out and what the character learns

**Make it interesting by:**
• Show the character's personality through what they do and say
• Use lots of details so we can picture everything clearly
• Include conversations between characters
• Make us care about what happens to the character
• Create some tension or excitement
• Give the character real emotions and feelings

**Writing tips:**
• Use simple, clear language
• Make each scene move the story forward
• Show us things instead of just telling us
• Make the character feel like a real person
• Include some surprises but make them make sense
• End the story in a way that feels complete

**What your story should feel like:**
• Engaging and easy to read
• Suitable for anyone to enjoy
• Focused on the character's journey
• Emotionally satisfying

Write the complete story now. Make sure it has a clear beginning, middle, and end:
"#
    )
}

/// Build a genre-flavored story prompt for a character.
///
/// Shares the base instruction with [`general_prompt`] and adds one fixed
/// guidance block per genre; `Genre::General` gets the generic block.
pub fn genre_prompt(name: &str, details: &str, genre: Genre) -> String {
    let base = format!(
        r#"
You are a great storyteller. Write a {genre} story about this character:

**Character Name:** {name}
**About the Character:** {details}

**Story Length:** About 1000-1200 words
"#
    );

    let genre_tips = match genre {
        Genre::Mystery => {
            r#"
**Mystery Story Tips:**
• Include a puzzle or mystery to solve
• Give clues throughout the story
• Make the reader want to figure it out
• Have a satisfying solution at the end
• Keep the reader guessing
"#
        }
        Genre::Adventure => {
            r#"
**Adventure Story Tips:**
• Include exciting action and challenges
• Take the character to interesting places
• Add some danger or risk
• Show the character being brave
• Make it fast-paced and thrilling
"#
        }
        Genre::Funny => {
            r#"
**Funny Story Tips:**
• Include humor and funny situations
• Make the character do amusing things
• Add funny dialogue and conversations
• Create silly or unexpected moments
• Keep it light-hearted and entertaining
"#
        }
        Genre::Heartwarming => {
            r#"
**Heartwarming Story Tips:**
• Focus on emotions and relationships
• Show kindness and caring
• Include touching or meaningful moments
• Make the reader feel good
• End with hope or happiness
"#
        }
        Genre::General => {
            r#"
**General Story Tips:**
• Make it interesting and engaging
• Focus on the character's growth
• Include realistic emotions
• Create a satisfying ending
"#
        }
    };

    let closing = r#"

**Basic Story Structure:**
1. Start by showing us the character
2. Give them a problem or challenge
3. Show how they handle it
4. End with a resolution

Write the complete story now using simple, clear language:
"#;

    format!("{base}{genre_tips}{closing}")
}

/// Build a rewrite instruction that embeds the previous story verbatim
/// together with the requested fixes.
pub fn improve_prompt(name: &str, details: &str, old_story: &str, feedback: &str) -> String {
    format!(
        r#"
Here is a story that needs to be improved:

**Character:** {name}
**Character Details:** {details}

**Current Story:**
{old_story}

**What needs to be better:**
{feedback}

Please rewrite the story to fix these issues. Keep the same character and main idea, but make the improvements requested. Use simple, clear language and make sure the story is complete and interesting.

Write the improved story now:
"#
    )
}
